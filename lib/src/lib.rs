//! ASCII ArtGen - image to ASCII art converter
//!
//! Decodes a raster image, resizes it with an aspect correction for
//! non-square terminal glyphs, and maps every pixel onto a fixed
//! density ramp of ten characters. The resulting grid can be printed,
//! written as text, or re-rendered as a raster image.
//!
//! # Example
//! ```no_run
//! use ascii_artgen::{ConvertConfig, convert, files};
//! use std::path::Path;
//!
//! let image = files::load_image(Path::new("photo.jpg")).unwrap();
//! let grid = convert(&image, &ConvertConfig::default()).unwrap();
//! print!("{grid}");
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod files;
pub mod geometry;
pub mod grid;
pub mod ramp;
pub mod raster;

// Re-export main types for convenience
pub use config::ConvertConfig;
pub use converter::convert;
pub use error::ConvertError;
pub use grid::AsciiGrid;

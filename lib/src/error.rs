use std::path::PathBuf;

/// Errors that can occur while converting or exporting ASCII art
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("unsupported format: {} (supported: .jpg, .jpeg, .png)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("could not decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not save image {}: {source}", .path.display())]
    SaveImage {
        path: PathBuf,
        source: image::ImageError,
    },
}

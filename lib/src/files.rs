//! File-system collaborators: input validation, loading, and exports

use crate::error::ConvertError;
use crate::grid::AsciiGrid;
use crate::raster::render_to_image;
use image::DynamicImage;
use std::fs;
use std::path::Path;

/// Extensions the decoder is asked to handle, lowercase
const VALID_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Check whether a file name carries a supported image extension
///
/// The comparison is case-insensitive; a missing extension is unsupported.
pub fn is_valid_image_format(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| VALID_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Append a file extension unless the name already ends with it
pub fn add_extension_if_missing(file_name: &str, extension: &str) -> String {
    if file_name.ends_with(extension) {
        file_name.to_string()
    } else {
        format!("{file_name}{extension}")
    }
}

/// Load and decode an input image
///
/// Validates existence, then the extension, before handing the file to the
/// decoder, so an obviously wrong path fails with a precise error instead
/// of a decode failure.
pub fn load_image(path: &Path) -> Result<DynamicImage, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::FileNotFound(path.to_path_buf()));
    }
    if !is_valid_image_format(&path.to_string_lossy()) {
        return Err(ConvertError::UnsupportedFormat(path.to_path_buf()));
    }
    image::open(path).map_err(ConvertError::Decode)
}

/// Write the grid as newline-joined rows, overwriting any existing file
pub fn write_text(grid: &AsciiGrid, path: &Path) -> Result<(), ConvertError> {
    fs::write(path, grid.to_text()).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} rows to {}", grid.height(), path.display());
    Ok(())
}

/// Render the grid onto a canvas and save it as an image
///
/// The format is inferred from the path's extension by the encoder.
pub fn save_raster(grid: &AsciiGrid, path: &Path, glyph_size: u32) -> Result<(), ConvertError> {
    let canvas = render_to_image(grid, glyph_size);
    canvas.save(path).map_err(|source| ConvertError::SaveImage {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "saved {}x{} raster to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(())
}

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::geometry::aspect_height;
use crate::grid::AsciiGrid;
use crate::ramp::map_intensity_to_char;
use image::{DynamicImage, imageops};
use rayon::prelude::*;

/// Converts a decoded image to an ASCII character grid
///
/// The full pipeline:
/// 1. Reduce to single-channel intensity
/// 2. Resize to (width, aspect-corrected height) with bilinear filtering
/// 3. Map every pixel in row-major order onto the density ramp
/// 4. Assemble the rows into the grid
///
/// The transform is pure: the grid's dimensions depend only on the source
/// dimensions and the configured width, never on pixel content.
///
/// # Arguments
/// * `input` - The decoded source image
/// * `config` - Conversion settings (output width, glyph cell size)
///
/// # Returns
/// The ASCII grid, or an error for an invalid configuration
pub fn convert(input: &DynamicImage, config: &ConvertConfig) -> Result<AsciiGrid, ConvertError> {
    config.validate()?;

    // Step 1: single-channel intensity
    let gray = input.to_luma8();
    let (source_width, source_height) = gray.dimensions();

    // Step 2: aspect-corrected resize
    let width = config.width;
    let height = aspect_height(width, source_width, source_height);
    log::debug!(
        "converting {}x{} -> {}x{} characters",
        source_width,
        source_height,
        width,
        height
    );
    let resized = imageops::resize(&gray, width, height, imageops::FilterType::Triangle);

    // Steps 3-4: map pixels row by row
    let rows: Vec<Vec<char>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| map_intensity_to_char(resized.get_pixel(x, y)[0]))
                .collect()
        })
        .collect();

    Ok(AsciiGrid::from_rows(rows))
}

//! Aspect-corrected output dimensions
//!
//! Terminal and monospace-font glyphs are roughly twice as tall as they are
//! wide, so mapping pixels to characters one-to-one stretches the result
//! vertically. The row count is scaled down to compensate.

/// Empirical height correction for non-square character cells
pub const CHAR_ASPECT_CORRECTION: f32 = 0.55;

/// Compute the row count for a target column count
///
/// Preserves the source aspect ratio under the character-cell correction:
/// `round(original_height / original_width * width * 0.55)`, clamped so a
/// degenerate tiny source still yields at least one row.
///
/// # Arguments
/// * `width` - Target output width in characters
/// * `original_width` - Source image width in pixels
/// * `original_height` - Source image height in pixels
///
/// # Returns
/// Output height in characters, always at least 1
pub fn aspect_height(width: u32, original_width: u32, original_height: u32) -> u32 {
    if original_width == 0 || original_height == 0 {
        return 1;
    }

    let ratio = original_height as f32 / original_width as f32;
    let height = (ratio * width as f32 * CHAR_ASPECT_CORRECTION).round() as u32;
    height.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_source() {
        // round(50 / 100 * 80 * 0.55) = round(22.0) = 22
        assert_eq!(aspect_height(80, 100, 50), 22);
    }

    #[test]
    fn test_square_source() {
        // round(1 * 80 * 0.55) = 44
        assert_eq!(aspect_height(80, 200, 200), 44);
    }

    #[test]
    fn test_portrait_source() {
        // round(2 * 40 * 0.55) = 44
        assert_eq!(aspect_height(40, 300, 600), 44);
    }

    #[test]
    fn test_degenerate_height_clamps_to_one() {
        // round(1 / 1000 * 1 * 0.55) = 0, clamped
        assert_eq!(aspect_height(1, 1000, 1), 1);
    }

    #[test]
    fn test_zero_source_dimensions() {
        assert_eq!(aspect_height(80, 0, 50), 1);
        assert_eq!(aspect_height(80, 100, 0), 1);
    }
}

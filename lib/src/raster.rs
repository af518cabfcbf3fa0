//! Raster re-rendering of an ASCII grid
//!
//! Each character gets a square pixel cell on a white canvas and is drawn
//! with a fixed 8x8 bitmap pattern stretched over the cell. Bitmap glyphs
//! keep the export self-contained; a font-based renderer could replace
//! `glyph_pixel` without touching the canvas layout.

use crate::grid::AsciiGrid;
use image::{Rgb, RgbImage};

const PAPER: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Render an ASCII grid onto a blank canvas
///
/// The canvas measures `(columns * glyph_size, rows * glyph_size)` pixels,
/// with each character row drawn at `y = row_index * glyph_size`.
///
/// # Arguments
/// * `grid` - The ASCII grid to render
/// * `glyph_size` - Pixel edge of the square cell allocated per character
///
/// # Returns
/// RGB image with the rendered ASCII art, dark glyphs on white
pub fn render_to_image(grid: &AsciiGrid, glyph_size: u32) -> RgbImage {
    let glyph_size = glyph_size.max(1);
    let width = grid.width() as u32 * glyph_size;
    let height = grid.height() as u32 * glyph_size;
    let mut canvas = RgbImage::from_pixel(width, height, PAPER);

    for (row_index, row) in grid.rows().enumerate() {
        for (col_index, &ch) in row.iter().enumerate() {
            for local_y in 0..glyph_size {
                for local_x in 0..glyph_size {
                    // Stretch the 8x8 pattern over the cell
                    let pattern_x = local_x * 8 / glyph_size;
                    let pattern_y = local_y * 8 / glyph_size;

                    if glyph_pixel(ch, pattern_x, pattern_y) {
                        let px = col_index as u32 * glyph_size + local_x;
                        let py = row_index as u32 * glyph_size + local_y;
                        canvas.put_pixel(px, py, INK);
                    }
                }
            }
        }
    }

    canvas
}

/// Determine if a pixel should be drawn for a character at a given position
///
/// Simple 8x8 bitmap representations of the density ramp characters.
///
/// # Arguments
/// * `ch` - The character
/// * `x` - X position within 8x8 grid (0-7)
/// * `y` - Y position within 8x8 grid (0-7)
///
/// # Returns
/// true if pixel should be drawn (ink), false for background
fn glyph_pixel(ch: char, x: u32, y: u32) -> bool {
    match ch {
        ' ' => false, // Space: always empty

        '.' => (3..=4).contains(&x) && (3..=4).contains(&y), // Small dot in center

        ':' => {
            // Two dots vertically
            (3..=4).contains(&x) && (y == 2 || y == 5)
        }

        '-' => y == 3 || y == 4, // Horizontal bar in middle

        '=' => y == 2 || y == 5, // Two horizontal lines

        '+' => {
            // Plus sign
            (x == 3 || x == 4) || (y == 3 || y == 4)
        }

        '*' => {
            // Star/asterisk - simplified
            (x == 3 || x == 4) || (y == 3 || y == 4) || (x == y) || (x == 7 - y)
        }

        '#' => {
            // Hash/pound
            (x == 2 || x == 5) || (y == 2 || y == 5)
        }

        '%' => {
            // Percent - simplified
            (x + y == 7) || (x == 1 && y == 1) || (x == 6 && y == 6)
        }

        '@' => {
            // At symbol - filled circle approximation
            let dx = x as i32 - 3;
            let dy = y as i32 - 3;
            dx * dx + dy * dy <= 12
        }

        _ => {
            // Unknown character: use a filled square
            true
        }
    }
}

/// Gradient example: convert a synthetic grayscale ramp to ASCII art
///
/// Builds a left-to-right gradient image and prints the converted grid,
/// which should sweep through the whole density ramp.
use ascii_artgen::{ConvertConfig, convert};
use image::{DynamicImage, GrayImage, Luma};

fn main() {
    println!("ASCII ArtGen - Gradient Example");
    println!("===============================\n");

    // Horizontal gradient, black on the left to white on the right
    let width = 256;
    let height = 128;
    let mut img = GrayImage::new(width, height);
    for (x, _, pixel) in img.enumerate_pixels_mut() {
        *pixel = Luma([x as u8]);
    }
    println!("Created test image: {}x{}", width, height);

    let config = ConvertConfig::default();
    let grid = convert(&DynamicImage::ImageLuma8(img), &config).expect("conversion failed");

    println!("Converted to {}x{} characters:\n", grid.width(), grid.height());
    print!("{grid}");
}

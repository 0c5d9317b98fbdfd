//! PNG encoding of finished canvases and decoding of rule images

use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

use crate::io::error::{CarpetError, Result, invalid_rule_file};
use crate::spatial::canvas::Canvas;
use crate::spatial::color::Color;

/// Convert a canvas into an RGBA image buffer
///
/// # Errors
///
/// Returns an error if the canvas side does not fit into PNG dimensions
pub fn canvas_to_image(canvas: &Canvas) -> Result<RgbaImage> {
    let side = u32::try_from(canvas.side()).map_err(|e| CarpetError::Computation {
        operation: "image conversion",
        reason: e.to_string(),
    })?;

    let mut img = ImageBuffer::new(side, side);
    for (x, y, color) in canvas.enumerate_pixels() {
        // Both coordinates are below `side`, which fits in u32
        img.put_pixel(x as u32, y as u32, Rgba(color));
    }

    Ok(img)
}

/// Export the canvas as a PNG image, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The canvas is too large to encode
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png(canvas: &Canvas, output_path: &Path) -> Result<()> {
    let img = canvas_to_image(canvas)?;

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| CarpetError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| CarpetError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Decode an image file into a square `[y, x]` matrix of RGBA colors
///
/// Any color type is converted to 8-bit RGBA.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The image is not square
pub fn load_square_pattern(path: &Path) -> Result<Array2<Color>> {
    let img = image::open(path).map_err(|e| CarpetError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    if width != height || width == 0 {
        return Err(invalid_rule_file(
            path,
            &format!("expected rule image to be square; got dimensions {width}x{height}"),
        ));
    }

    let side = width as usize;
    let mut pattern = Array2::from_elem((side, side), [0; 4]);
    for (x, y, pixel) in rgba_img.enumerate_pixels() {
        if let Some(cell) = pattern.get_mut([y as usize, x as usize]) {
            *cell = pixel.0;
        }
    }

    Ok(pattern)
}

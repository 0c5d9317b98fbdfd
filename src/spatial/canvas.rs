//! Square pixel canvas written by the substitution engine
//!
//! Pixels are stored row-major in an `ndarray` matrix indexed as `[row, col]`,
//! i.e. `[y, x]`. Accessors take `(x, y)` to match image conventions.

use ndarray::Array2;

use crate::spatial::color::Color;

/// Square RGBA canvas of fixed side length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Array2<Color>,
}

impl Canvas {
    /// Create a canvas of `side × side` pixels, all set to `fill`
    pub fn filled(side: usize, fill: Color) -> Self {
        Self {
            pixels: Array2::from_elem((side, side), fill),
        }
    }

    /// Side length in pixels
    pub fn side(&self) -> usize {
        self.pixels.nrows()
    }

    /// Overwrite every pixel with `color`
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Color at column `x`, row `y`, or `None` outside the canvas
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.pixels.get([y, x]).copied()
    }

    /// Set the pixel at column `x`, row `y`
    ///
    /// Returns `false` without writing if the position is outside the canvas.
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> bool {
        self.pixels.get_mut([y, x]).map(|pixel| *pixel = color).is_some()
    }

    /// Iterate over pixels in row-major order as `(x, y, color)`
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.pixels
            .indexed_iter()
            .map(|((y, x), &color)| (x, y, color))
    }

    /// Whether every pixel equals `color`
    pub fn is_uniform(&self, color: Color) -> bool {
        self.pixels.iter().all(|&pixel| pixel == color)
    }

    /// Pixel rows as nested vectors, top to bottom
    pub fn to_rows(&self) -> Vec<Vec<Color>> {
        self.pixels.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Borrow the underlying `[y, x]` pixel matrix
    pub const fn pixels(&self) -> &Array2<Color> {
        &self.pixels
    }
}

//! Generation limits, defaults and runtime configuration

use crate::spatial::color::Color;

/// Largest accepted iteration count
pub const MAX_ITERATIONS: u32 = 1000;

// PNG dimensions are u32 and the canvas lives in memory, so keep well below both
/// Largest accepted canvas side length in pixels
pub const MAX_CANVAS_DIMENSION: usize = 65_535;

/// Canvas color used when none is given (opaque white)
pub const DEFAULT_INITIAL_COLOR: Color = [0xFF, 0xFF, 0xFF, 0xFF];

/// Extension of rule image files inside the rules directory
pub const RULE_FILE_EXTENSION: &str = "png";

// Palette log formatting
/// Number of colors listed per log line
pub const COLORS_PER_LOG_LINE: usize = 9;

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Parameters of a single carpet generation run
///
/// For one configuration and one rule set, the output is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Number of subdivision rounds
    pub iterations: u32,
    /// Color the canvas is filled with before the first round
    pub initial_color: Color,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            iterations: 1,
            initial_color: DEFAULT_INITIAL_COLOR,
        }
    }
}

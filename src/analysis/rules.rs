//! Substitution rules: a square color pattern keyed by a trigger color

use ndarray::Array2;
use std::collections::HashMap;
use std::fmt;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::color::{Color, color_hex};

// Letters used by the compact pattern summary
const SUMMARY_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// A square replacement pattern applied to regions of the trigger color
///
/// The pattern is stored as a `[y, x]` matrix. Rules are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    trigger: Color,
    pattern: Array2<Color>,
}

impl Rule {
    /// Create a rule from its trigger color and a square `[y, x]` pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or not square
    pub fn new(trigger: Color, pattern: Array2<Color>) -> Result<Self> {
        let (height, width) = pattern.dim();
        if width == 0 || width != height {
            return Err(invalid_parameter(
                "pattern",
                &format!("{width}x{height}"),
                &"rule pattern must be a non-empty square",
            ));
        }

        Ok(Self { trigger, pattern })
    }

    /// Create a rule from pattern rows listed top to bottom
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are ragged, empty or do not form a square
    pub fn from_rows(trigger: Color, rows: &[Vec<Color>]) -> Result<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return Err(invalid_parameter(
                "pattern",
                &format!("{size} rows"),
                &"every row must have as many colors as there are rows",
            ));
        }

        let cells: Vec<Color> = rows.iter().flatten().copied().collect();
        let pattern = Array2::from_shape_vec((size, size), cells)
            .map_err(|e| invalid_parameter("pattern", &format!("{size} rows"), &e))?;
        Self::new(trigger, pattern)
    }

    /// Create a rule whose pattern is a single color everywhere
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero
    pub fn uniform(trigger: Color, size: usize, color: Color) -> Result<Self> {
        Self::new(trigger, Array2::from_elem((size, size), color))
    }

    /// Side length of the pattern (the growth factor)
    pub fn size(&self) -> usize {
        self.pattern.nrows()
    }

    /// The color this rule is responsible for
    pub const fn trigger(&self) -> Color {
        self.trigger
    }

    /// Whether this rule is responsible for `color`
    pub fn matches(&self, color: Color) -> bool {
        self.trigger == color
    }

    /// Replacement color at column `x`, row `y`; `None` outside the pattern
    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        self.pattern.get([y, x]).copied()
    }

    /// Iterate over all pattern colors in row-major order
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.pattern.iter().copied()
    }
}

/// Compact summary such as `FFFFFFFF → {ab ba}`
///
/// Each distinct color gets the next letter in first-seen order; rows are
/// separated by spaces. Colors beyond the 26th are shown as `?`.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: HashMap<Color, char> = HashMap::new();
        let mut out = String::with_capacity(self.size() * (self.size() + 1) + 2);

        out.push('{');
        for (y, row) in self.pattern.rows().into_iter().enumerate() {
            if y > 0 {
                out.push(' ');
            }
            for &color in row {
                let next = letters.len();
                let letter = *letters.entry(color).or_insert_with(|| {
                    SUMMARY_LETTERS.get(next).map_or('?', |&b| char::from(b))
                });
                out.push(letter);
            }
        }
        out.push('}');

        write!(f, "{} → {out}", color_hex(self.trigger))
    }
}

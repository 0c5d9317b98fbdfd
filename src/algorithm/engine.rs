//! Recursive substitution engine producing the carpet canvas
//!
//! Each round subdivides every region of the current depth: the region's
//! representative color is sampled at the last pixel of its block, the
//! responsible rule is resolved, and the rule's pattern is stamped into the
//! region one level deeper. Round `d + 1` reads what round `d` wrote, so
//! rounds run strictly in order.

use log::{debug, info};
use num_traits::checked_pow;

use crate::algorithm::coordinates::{absolute, block_size, sub_cell_absolute};
use crate::algorithm::lookup::RuleLookup;
use crate::analysis::palette::RuleSet;
use crate::io::configuration::{GenerationConfig, MAX_CANVAS_DIMENSION, MAX_ITERATIONS};
use crate::io::error::{CarpetError, Result, computation_error, invalid_parameter};
use crate::spatial::canvas::Canvas;
use crate::spatial::color::color_hex;

/// Side length `growth^iterations` of the final canvas
///
/// # Errors
///
/// Returns [`CarpetError::CanvasTooLarge`] if the side exceeds
/// [`MAX_CANVAS_DIMENSION`] or does not fit in `usize`
pub fn canvas_side(growth: usize, iterations: u32) -> Result<usize> {
    checked_pow(growth, iterations as usize)
        .filter(|&side| side <= MAX_CANVAS_DIMENSION)
        .ok_or(CarpetError::CanvasTooLarge { growth, iterations })
}

/// Owns the canvas and applies one subdivision round per call
pub struct SubstitutionEngine<'a> {
    rules: &'a RuleSet,
    config: GenerationConfig,
    canvas: Canvas,
    depth: u32,
}

impl<'a> SubstitutionEngine<'a> {
    /// Create an engine with a canvas filled with the initial color
    ///
    /// Only structural parameters are checked here; use
    /// [`RuleSet::validate_coverage`] (or [`generate`]) to reject rule sets
    /// that would fail mid-run.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `config.iterations` exceeds [`MAX_ITERATIONS`]
    /// - The resulting canvas would be too large
    pub fn new(rules: &'a RuleSet, config: GenerationConfig) -> Result<Self> {
        if config.iterations > MAX_ITERATIONS {
            return Err(invalid_parameter(
                "iterations",
                &config.iterations,
                &format!("expected 0 <= iterations <= {MAX_ITERATIONS}"),
            ));
        }

        let side = canvas_side(rules.growth(), config.iterations)?;
        info!(
            "initializing a {side}x{side} canvas with color {}",
            color_hex(config.initial_color)
        );

        Ok(Self {
            rules,
            config,
            canvas: Canvas::filled(side, config.initial_color),
            depth: 0,
        })
    }

    /// Reset the canvas to the initial color and restart at depth 0
    pub fn initialize(&mut self) {
        self.canvas.fill(self.config.initial_color);
        self.depth = 0;
    }

    /// Subdivide every region of the current depth
    ///
    /// Returns `true` while more rounds remain. Once all rounds have run,
    /// further calls do nothing and return `false`.
    ///
    /// # Errors
    ///
    /// Returns [`CarpetError::UnmatchedColor`] if no rule triggers on a
    /// sampled region color. The canvas is then partially written and must
    /// not be used as a result.
    pub fn run_iteration(&mut self) -> Result<bool> {
        let total = self.config.iterations;
        if self.depth >= total {
            return Ok(false);
        }

        let depth = self.depth;
        let growth = self.rules.growth();
        let regions = block_size(0, depth, growth);
        let rules = self.rules;
        debug!("iteration {depth}: {regions}x{regions} regions");

        for py in 0..regions {
            for px in 0..regions {
                let sample_x = absolute(px, depth, total, growth);
                let sample_y = absolute(py, depth, total, growth);
                let color = self.canvas.get(sample_x, sample_y).ok_or_else(|| {
                    computation_error(
                        "region sampling",
                        &format!("position {sample_x},{sample_y} is outside the canvas"),
                    )
                })?;

                let rule = rules.resolve(color).ok_or(CarpetError::UnmatchedColor {
                    color,
                    position: (px, py),
                    depth,
                })?;

                for y in 0..growth {
                    let target_y = sub_cell_absolute(py, y, depth, total, growth);
                    for x in 0..growth {
                        let target_x = sub_cell_absolute(px, x, depth, total, growth);
                        let replacement = rule.color_at(x, y).ok_or_else(|| {
                            computation_error(
                                "pattern stamping",
                                &format!("offset {x},{y} is outside the rule pattern"),
                            )
                        })?;
                        if !self.canvas.set(target_x, target_y, replacement) {
                            return Err(computation_error(
                                "pattern stamping",
                                &format!("position {target_x},{target_y} is outside the canvas"),
                            ));
                        }
                    }
                }
            }
        }

        self.depth += 1;
        Ok(self.depth < total)
    }

    /// Run all remaining rounds
    ///
    /// # Errors
    ///
    /// Propagates the first error of [`Self::run_iteration`]
    pub fn run(&mut self) -> Result<()> {
        while self.run_iteration()? {}
        Ok(())
    }

    /// Number of rounds already applied
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Total number of rounds
    pub const fn iterations(&self) -> u32 {
        self.config.iterations
    }

    /// Whether every round has been applied
    pub const fn is_complete(&self) -> bool {
        self.depth >= self.config.iterations
    }

    /// Current canvas state
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Hand the canvas over to the caller
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

/// Validate the rule set and run a complete generation
///
/// # Errors
///
/// Returns an error if:
/// - A pattern color or the initial color has no responsible rule
/// - The engine parameters are invalid (see [`SubstitutionEngine::new`])
pub fn generate(rules: &RuleSet, config: GenerationConfig) -> Result<Canvas> {
    rules.validate_coverage(config.initial_color)?;

    let mut engine = SubstitutionEngine::new(rules, config)?;
    engine.run()?;
    Ok(engine.into_canvas())
}

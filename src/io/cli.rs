//! Command-line interface for generating a carpet from a rules directory

use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

use crate::algorithm::engine::SubstitutionEngine;
use crate::io::configuration::{GenerationConfig, MAX_ITERATIONS};
use crate::io::error::Result;
use crate::io::image::export_canvas_as_png;
use crate::io::logging::log_rule_set;
use crate::io::progress::ProgressManager;
use crate::io::rule_files::load_rule_set;
use crate::spatial::color::{Color, parse_color_hex};

const LONG_ABOUT: &str = "Generate carpets as presented by Jack Hodkinson in \
\"Carpets, Genetics, and the Pi Fractal\".

Every PNG in RULES_DIR is a rule: a square pattern replacing each region whose \
color matches the RRGGBBAA quadruple in the rule's file name. Rules are applied \
in file name order and the last matching rule wins.";

#[derive(Parser, Debug)]
#[command(name = "carpet")]
#[command(
    author,
    version,
    about = "Generate self-similar carpet images from substitution rules",
    long_about = LONG_ABOUT
)]
/// Command-line arguments for carpet generation
pub struct Cli {
    /// Directory of rule PNG files named after their trigger color
    #[arg(value_name = "RULES_DIR")]
    pub rules_dir: PathBuf,

    /// Number of subdivision rounds (0 to 1000)
    #[arg(value_name = "ITERATIONS", value_parser = parse_iterations)]
    pub iterations: u32,

    /// Output PNG file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Initial canvas color as RRGGBBAA hex
    #[arg(
        value_name = "INITIAL_COLOR",
        value_parser = parse_initial_color,
        default_value = "FFFFFFFF"
    )]
    pub initial_color: Color,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation parameters taken from the arguments
    pub const fn config(&self) -> GenerationConfig {
        GenerationConfig {
            iterations: self.iterations,
            initial_color: self.initial_color,
        }
    }
}

fn parse_iterations(value: &str) -> std::result::Result<u32, String> {
    let iterations: u32 = value
        .parse()
        .map_err(|e| format!("expected a non-negative integer: {e}"))?;
    if iterations > MAX_ITERATIONS {
        return Err(format!(
            "expected 0 <= iterations <= {MAX_ITERATIONS}; got {iterations}"
        ));
    }
    Ok(iterations)
}

fn parse_initial_color(value: &str) -> std::result::Result<Color, String> {
    parse_color_hex(value).map_err(|e| e.to_string())
}

/// Runs one generation from parsed arguments to the written PNG
pub struct CarpetProcessor {
    cli: Cli,
}

impl CarpetProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load rules, generate the carpet and export it
    ///
    /// Nothing is written if any step fails.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The rules directory cannot be loaded into a valid rule set
    /// - A color that can appear has no responsible rule
    /// - Generation fails or the canvas would be too large
    /// - The output image cannot be written
    pub fn process(&self) -> Result<()> {
        let start_time = Instant::now();
        let rules = load_rule_set(&self.cli.rules_dir)?;
        log_rule_set(&rules);

        let config = self.cli.config();
        rules.validate_coverage(config.initial_color)?;

        let mut engine = SubstitutionEngine::new(&rules, config)?;
        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(config.iterations)
        } else {
            ProgressManager::hidden(config.iterations)
        };

        while engine.run_iteration()? {
            progress.update_depth(engine.depth());
        }
        progress.update_depth(engine.depth());
        progress.finish();

        export_canvas_as_png(engine.canvas(), &self.cli.output)?;
        info!(
            "carpet of {0}x{0} pixels written to {1} in {2:.2?}",
            engine.canvas().side(),
            self.cli.output.display(),
            start_time.elapsed()
        );

        Ok(())
    }
}

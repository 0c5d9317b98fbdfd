//! Self-similar carpet generation by recursive color substitution
//!
//! A carpet starts as a canvas of one color. Each round splits every region
//! into `growth × growth` sub-regions, colored by the pattern of the rule
//! whose trigger matches the region's color. After `n` rounds the canvas is
//! `growth^n` pixels wide.

#![forbid(unsafe_code)]

/// Coordinate mapping, rule resolution and the substitution engine
pub mod algorithm;
/// Rules, rule sets and their validation
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Canvas and color data structures
pub mod spatial;

pub use algorithm::engine::{SubstitutionEngine, generate};
pub use analysis::palette::RuleSet;
pub use analysis::rules::Rule;
pub use io::configuration::GenerationConfig;
pub use io::error::{CarpetError, Result};
pub use spatial::{Canvas, Color};

//! Input/output collaborators around the substitution engine
//!
//! Covers command-line handling, rule file loading, PNG export, logging,
//! progress display and the shared error type.

/// Command-line parsing and run orchestration
pub mod cli;
/// Limits, defaults and generation parameters
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// PNG encoding and decoding
pub mod image;
/// Log initialization and palette diagnostics
pub mod logging;
/// Progress bar over subdivision rounds
pub mod progress;
/// Rule loading from PNG files
pub mod rule_files;

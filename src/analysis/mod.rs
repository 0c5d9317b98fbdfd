//! Rule definitions and rule set validation

/// Ordered rule sets, coverage validation and palette diagnostics
pub mod palette;
/// Square substitution rules keyed by trigger color
pub mod rules;

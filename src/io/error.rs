//! Error types for rule loading, validation and carpet generation

use std::fmt;
use std::path::PathBuf;

use crate::spatial::color::{Color, color_hex};

/// Where a color that needs a rule was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOrigin {
    /// The color occurs inside at least one rule pattern
    Pattern,
    /// The color is the canvas initialization color
    Initial,
}

/// Main error type for all carpet operations
#[derive(Debug)]
pub enum CarpetError {
    /// Failed to load a rule image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the generated carpet to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A rule file exists but cannot be used as a rule
    InvalidRuleFile {
        /// Path to the rule file
        path: PathBuf,
        /// Description of what's wrong with the file
        reason: String,
    },

    /// No rules were provided
    EmptyRuleSet {
        /// Where rules were looked for (directory or description)
        location: String,
    },

    /// A rule's side length differs from the first rule's
    MismatchedRuleSize {
        /// Side length of the first rule
        expected: usize,
        /// Side length of the offending rule
        found: usize,
        /// Path or index identifying the offending rule
        origin: String,
    },

    /// `growth^iterations` exceeds the supported canvas dimension
    CanvasTooLarge {
        /// Rule side length
        growth: usize,
        /// Requested iteration count
        iterations: u32,
    },

    /// A color that can appear during generation has no responsible rule
    UncoveredColor {
        /// The color without a rule
        color: Color,
        /// Where the color comes from
        origin: ColorOrigin,
    },

    /// No rule matched a sampled region color during generation
    UnmatchedColor {
        /// The sampled representative color
        color: Color,
        /// Logical `(x, y)` position of the region at its depth
        position: (usize, usize),
        /// Depth at which the region was being subdivided
        depth: u32,
    },

    /// Internal computation reached an inconsistent state
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for CarpetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidRuleFile { path, reason } => {
                write!(f, "Invalid rule file '{}': {reason}", path.display())
            }
            Self::EmptyRuleSet { location } => {
                write!(
                    f,
                    "At least one rule is required to run ({location} does not contain any)"
                )
            }
            Self::MismatchedRuleSize {
                expected,
                found,
                origin,
            } => {
                write!(
                    f,
                    "Expected dimensions {expected}x{expected} like the first rule; got {found}x{found} in {origin}"
                )
            }
            Self::CanvasTooLarge { growth, iterations } => {
                write!(
                    f,
                    "Canvas of side {growth}^{iterations} exceeds the supported dimension"
                )
            }
            Self::UncoveredColor { color, origin } => match origin {
                ColorOrigin::Pattern => write!(
                    f,
                    "Color {} occurs in rules, but no rule matches this color",
                    color_hex(*color)
                ),
                ColorOrigin::Initial => write!(
                    f,
                    "Initialization color is {0}, please provide a rule for {0}",
                    color_hex(*color)
                ),
            },
            Self::UnmatchedColor {
                color,
                position,
                depth,
            } => {
                write!(
                    f,
                    "No rule found for color {} at {},{} (depth {depth})",
                    color_hex(*color),
                    position.0,
                    position.1
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for CarpetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for carpet results
pub type Result<T> = std::result::Result<T, CarpetError>;

impl From<image::ImageError> for CarpetError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for CarpetError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CarpetError {
    CarpetError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> CarpetError {
    CarpetError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an invalid rule file error
pub fn invalid_rule_file(path: impl Into<PathBuf>, reason: &impl ToString) -> CarpetError {
    CarpetError::InvalidRuleFile {
        path: path.into(),
        reason: reason.to_string(),
    }
}

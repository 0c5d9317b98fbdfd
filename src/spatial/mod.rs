//! Spatial data structures for the carpet canvas
//!
//! This module contains:
//! - RGBA color representation and packing
//! - The square pixel canvas written during generation

/// Square pixel canvas owned by the substitution engine
pub mod canvas;
/// Color packing, parsing and formatting utilities
pub mod color;

pub use canvas::Canvas;
pub use color::Color;

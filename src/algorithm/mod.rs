/// Depth-to-canvas coordinate mapping
pub mod coordinates;
/// Substitution engine driving the subdivision rounds
pub mod engine;
/// Last-match-wins rule resolution
pub mod lookup;

//! Mapping between subdivision depths and final canvas coordinates
//!
//! At depth `d` the canvas is logically a `growth^d`-wide grid. Each logical
//! cell covers a block of `growth^(total - d)` pixels per axis in the final
//! canvas. The engine addresses a block by its **last** pixel; sampling a
//! region's representative color and stamping sub-cells both rely on this.

/// Number of final pixels per axis covered by one cell at `at_depth`
///
/// Callers must keep `growth^(total_depth - at_depth)` within `usize`; the
/// engine guarantees this by bounding the canvas size up front.
pub const fn block_size(at_depth: u32, total_depth: u32, growth: usize) -> usize {
    growth.pow(total_depth - at_depth)
}

/// Map `coord` at `at_depth` to the last final-canvas pixel of its block
///
/// With `scale = growth^(total_depth - at_depth)`, cell `coord` covers
/// `[coord * scale, (coord + 1) * scale)` and this returns
/// `(coord + 1) * scale - 1`. For example with one cell at depth 0, three
/// iterations and growth 3, coordinate 0 maps to 26.
///
/// Requires `growth >= 1` and `at_depth <= total_depth`.
pub const fn absolute(coord: usize, at_depth: u32, total_depth: u32, growth: usize) -> usize {
    (coord + 1) * block_size(at_depth, total_depth, growth) - 1
}

/// Final-canvas position of sub-cell `offset` inside cell `cell` at `depth`
///
/// The sub-cell lives one level deeper at `cell * growth + offset` and is
/// addressed, like every block, by its last pixel.
pub const fn sub_cell_absolute(
    cell: usize,
    offset: usize,
    depth: u32,
    total_depth: u32,
    growth: usize,
) -> usize {
    absolute(cell * growth + offset, depth + 1, total_depth, growth)
}

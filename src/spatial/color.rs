//! RGBA color representation shared by rules, canvas and diagnostics
//!
//! Colors are plain `[u8; 4]` arrays in `R, G, B, A` channel order. Packing
//! into a `u32` and hex formatting both follow the same `RRGGBBAA` layout, so
//! a packed value printed as `{:08X}` equals the hex representation.

use crate::io::error::{Result, invalid_parameter};

/// Four 8-bit channels in `R, G, B, A` order
pub type Color = [u8; 4];

/// Number of hex digits in a textual color
pub const HEX_COLOR_DIGITS: usize = 8;

/// Pack a color into a `u32` with bit layout `0xRRGGBBAA`
///
/// Red occupies the most significant byte and alpha the least significant,
/// so numeric order of packed values equals lexicographic channel order.
pub const fn pack_color(color: Color) -> u32 {
    u32::from_be_bytes(color)
}

/// Inverse of [`pack_color`]
pub const fn unpack_color(packed: u32) -> Color {
    packed.to_be_bytes()
}

/// Format a color as eight uppercase hex digits, e.g. `204060FF`
pub fn color_hex(color: Color) -> String {
    format!("{:08X}", pack_color(color))
}

/// Parse exactly eight hex digits (`RRGGBBAA`, any case) into a color
///
/// # Errors
///
/// Returns an error if the input is not exactly eight hexadecimal digits
pub fn parse_color_hex(text: &str) -> Result<Color> {
    if text.len() != HEX_COLOR_DIGITS || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid_parameter(
            "color",
            &text,
            &"expected 8 hexadecimal characters like '204060FF'",
        ));
    }

    u32::from_str_radix(text, 16)
        .map(unpack_color)
        .map_err(|e| invalid_parameter("color", &text, &e))
}

/// Find the first `RRGGBBAA` quadruple embedded anywhere in `text`
///
/// Used to read a rule's trigger color from its file name, so
/// `rule_204060ff.png` yields `[0x20, 0x40, 0x60, 0xFF]`.
pub fn find_color_hex(text: &str) -> Option<Color> {
    let bytes = text.as_bytes();
    let mut run_start = 0;

    for (index, byte) in bytes.iter().enumerate() {
        if !byte.is_ascii_hexdigit() {
            run_start = index + 1;
            continue;
        }
        if index + 1 - run_start == HEX_COLOR_DIGITS {
            // Hex digits are ASCII so the byte range is a valid str slice
            return text
                .get(run_start..=index)
                .and_then(|digits| parse_color_hex(digits).ok());
        }
    }

    None
}

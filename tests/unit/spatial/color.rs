//! Tests for color packing, hex parsing and file name color extraction

#[cfg(test)]
mod tests {
    use carpet::spatial::color::{
        color_hex, find_color_hex, pack_color, parse_color_hex, unpack_color,
    };

    // Tests packing puts red in the high byte and alpha in the low byte
    // Verified by packing in little-endian order
    #[test]
    fn test_pack_color_layout() {
        assert_eq!(pack_color([0x20, 0x40, 0x60, 0xFF]), 0x2040_60FF);
        assert_eq!(pack_color([0, 0, 0, 1]), 1);
        assert_eq!(unpack_color(0x2040_60FF), [0x20, 0x40, 0x60, 0xFF]);
    }

    // Tests packed order follows channel order
    // Verified by swapping red and alpha in the layout
    #[test]
    fn test_pack_color_ordering() {
        assert!(pack_color([1, 0, 0, 0]) > pack_color([0, 255, 255, 255]));
        assert!(pack_color([0, 0, 1, 0]) > pack_color([0, 0, 0, 255]));
    }

    // Tests hex output is eight uppercase digits
    // Verified by dropping zero padding
    #[test]
    fn test_color_hex() {
        assert_eq!(color_hex([0x20, 0x40, 0x60, 0xFF]), "204060FF");
        assert_eq!(color_hex([0, 0, 0, 0]), "00000000");
        assert_eq!(color_hex([0xAB, 0xCD, 0xEF, 0x01]), "ABCDEF01");
    }

    // Tests parsing accepts either case
    // Verified by restricting to uppercase digits
    #[test]
    fn test_parse_color_hex_valid() {
        assert!(matches!(parse_color_hex("204060FF"), Ok([0x20, 0x40, 0x60, 0xFF])));
        assert!(matches!(parse_color_hex("abcdef01"), Ok([0xAB, 0xCD, 0xEF, 0x01])));
    }

    // Tests parsing rejects wrong lengths and non-hex input
    // Verified by removing the length check
    #[test]
    fn test_parse_color_hex_invalid() {
        assert!(parse_color_hex("FFFFFF").is_err());
        assert!(parse_color_hex("FFFFFFFFF").is_err());
        assert!(parse_color_hex("GGFFFFFF").is_err());
        assert!(parse_color_hex("+FFFFFFF").is_err());
        assert!(parse_color_hex("").is_err());
    }

    // Tests the first eight-digit hex run in a file name is used
    // Verified by requiring the quadruple at the start of the name
    #[test]
    fn test_find_color_hex_in_file_name() {
        assert_eq!(find_color_hex("204060FF.png"), Some([0x20, 0x40, 0x60, 0xFF]));
        assert_eq!(
            find_color_hex("rule_ff000080.png"),
            Some([0xFF, 0x00, 0x00, 0x80])
        );
        assert_eq!(
            find_color_hex("x_0123456789.png"),
            Some([0x01, 0x23, 0x45, 0x67])
        );
    }

    // Tests names without a full quadruple yield nothing
    // Verified by accepting shorter hex runs
    #[test]
    fn test_find_color_hex_missing() {
        assert_eq!(find_color_hex("readme.png"), None);
        assert_eq!(find_color_hex("FFFF_FFFF.png"), None);
        assert_eq!(find_color_hex(""), None);
    }
}

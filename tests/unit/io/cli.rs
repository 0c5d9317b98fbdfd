//! Tests for command-line parsing and end-to-end processing

#[cfg(test)]
mod tests {
    use carpet::io::cli::{CarpetProcessor, Cli};
    use carpet::io::configuration::DEFAULT_INITIAL_COLOR;
    use carpet::io::error::CarpetError;
    use carpet::spatial::color::Color;
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use std::ffi::OsStr;
    use std::path::{Path, PathBuf};

    const W: Color = [255, 255, 255, 255];
    const K: Color = [0, 0, 0, 255];

    fn write_rule(dir: &Path, name: &str, rows: [[Color; 2]; 2]) {
        let img = RgbaImage::from_fn(2, 2, |x, y| {
            Rgba(
                rows.get(y as usize)
                    .and_then(|row| row.get(x as usize))
                    .copied()
                    .unwrap_or(W),
            )
        });
        assert!(img.save(dir.join(name)).is_ok());
    }

    // Tests parsing with only required arguments uses defaults
    // Verified by changing the default initial color
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["carpet", "rules", "3", "out.png"]);

        assert_eq!(cli.rules_dir, PathBuf::from("rules"));
        assert_eq!(cli.iterations, 3);
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!(cli.initial_color, DEFAULT_INITIAL_COLOR);
        assert!(cli.should_show_progress());
    }

    // Tests the optional initial color and quiet flag
    // Verified by ignoring the color argument
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from(["carpet", "rules", "0", "out.png", "204060ff", "--quiet"]);

        assert_eq!(cli.initial_color, [0x20, 0x40, 0x60, 0xFF]);
        assert!(!cli.should_show_progress());

        let config = cli.config();
        assert_eq!(config.iterations, 0);
        assert_eq!(config.initial_color, [0x20, 0x40, 0x60, 0xFF]);
    }

    // Tests out-of-range iterations and malformed colors are rejected
    // Verified by removing the custom value parsers
    #[test]
    fn test_cli_rejects_invalid_values() {
        assert!(Cli::try_parse_from(["carpet", "rules", "1001", "out.png"]).is_err());
        assert!(Cli::try_parse_from(["carpet", "rules", "-1", "out.png"]).is_err());
        assert!(Cli::try_parse_from(["carpet", "rules", "2", "out.png", "FFFFFF"]).is_err());
        assert!(Cli::try_parse_from(["carpet", "rules", "2"]).is_err());
        assert!(Cli::try_parse_from(["carpet", "rules", "1000", "out.png"]).is_ok());
    }

    // Tests processing writes the generated carpet
    // Verified by exporting the canvas before running rounds
    #[test]
    fn test_process_writes_carpet() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        let rules_dir = dir.path().join("rules");
        assert!(std::fs::create_dir(&rules_dir).is_ok());
        write_rule(&rules_dir, "white_FFFFFFFF.png", [[W, K], [K, W]]);
        write_rule(&rules_dir, "black_000000FF.png", [[K, K], [K, K]]);
        let output = dir.path().join("carpet.png");

        let cli = Cli::parse_from([
            OsStr::new("carpet"),
            rules_dir.as_os_str(),
            OsStr::new("2"),
            output.as_os_str(),
            OsStr::new("--quiet"),
        ]);
        assert!(CarpetProcessor::new(cli).process().is_ok());

        let Ok(decoded) = image::open(&output) else {
            unreachable!("output is a PNG");
        };
        let decoded = decoded.to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(decoded.get_pixel(0, 0), &Rgba(W));
        assert_eq!(decoded.get_pixel(1, 0), &Rgba(K));
        assert_eq!(decoded.get_pixel(2, 0), &Rgba(K));
        assert_eq!(decoded.get_pixel(3, 3), &Rgba(W));
    }

    // Tests uncovered colors stop processing before any output is written
    // Verified by validating after export
    #[test]
    fn test_process_rejects_uncovered_colors() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        write_rule(dir.path(), "white_FFFFFFFF.png", [[W, K], [K, W]]);
        let output = dir.path().join("carpet.png");

        let cli = Cli::parse_from([
            OsStr::new("carpet"),
            dir.path().as_os_str(),
            OsStr::new("1"),
            output.as_os_str(),
            OsStr::new("-q"),
        ]);

        assert!(matches!(
            CarpetProcessor::new(cli).process(),
            Err(CarpetError::UncoveredColor { color: K, .. })
        ));
        assert!(!output.exists());
    }
}

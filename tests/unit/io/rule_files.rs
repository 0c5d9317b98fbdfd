//! Tests for loading rule sets from directories of PNG files

#[cfg(test)]
mod tests {
    use carpet::io::error::CarpetError;
    use carpet::io::rule_files::{
        collect_rule_files, load_rule, load_rule_set, trigger_from_file_name,
    };
    use carpet::spatial::color::Color;
    use image::{Rgba, RgbaImage};
    use std::path::Path;

    const W: Color = [255, 255, 255, 255];
    const K: Color = [0, 0, 0, 255];

    fn write_rule(dir: &Path, name: &str, size: u32, color: Color) {
        assert!(
            RgbaImage::from_pixel(size, size, Rgba(color))
                .save(dir.join(name))
                .is_ok()
        );
    }

    // Tests the trigger color is read from the file name only
    // Verified by parsing the whole path
    #[test]
    fn test_trigger_from_file_name() {
        assert!(matches!(
            trigger_from_file_name(Path::new("00000000/white_FFFFFFFF.png")),
            Ok(W)
        ));
        assert!(matches!(
            trigger_from_file_name(Path::new("00000000/white.png")),
            Err(CarpetError::InvalidRuleFile { .. })
        ));
    }

    // Tests a single rule file yields trigger and pattern
    // Verified by swapping trigger and pattern color
    #[test]
    fn test_load_rule() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        write_rule(dir.path(), "a_FFFFFFFF.png", 3, K);

        let Ok(rule) = load_rule(&dir.path().join("a_FFFFFFFF.png")) else {
            unreachable!("valid rule file");
        };
        assert_eq!(rule.trigger(), W);
        assert_eq!(rule.size(), 3);
        assert!(rule.colors().all(|color| color == K));
    }

    // Tests only PNG files are collected, sorted by name
    // Verified by returning directory order
    #[test]
    fn test_collect_rule_files_sorted() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        write_rule(dir.path(), "b_000000FF.png", 1, W);
        write_rule(dir.path(), "a_FFFFFFFF.png", 1, K);
        assert!(std::fs::write(dir.path().join("notes.txt"), "not a rule").is_ok());
        assert!(std::fs::create_dir(dir.path().join("sub.png")).is_ok());

        let Ok(files) = collect_rule_files(dir.path()) else {
            unreachable!("directory is readable");
        };
        let names: Vec<String> = files
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a_FFFFFFFF.png", "b_000000FF.png"]);
    }

    // Tests files without a trigger in the name are skipped
    // Verified by failing on the first unnamed file
    #[test]
    fn test_load_rule_set_skips_unnamed_files() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        write_rule(dir.path(), "a_FFFFFFFF.png", 2, K);
        write_rule(dir.path(), "b_000000FF.png", 2, K);
        write_rule(dir.path(), "preview.png", 5, W);

        let Ok(rules) = load_rule_set(dir.path()) else {
            unreachable!("two valid rules present");
        };
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.growth(), 2);
        assert_eq!(
            rules.rules().iter().map(|rule| rule.trigger()).collect::<Vec<_>>(),
            vec![W, K]
        );
    }

    // Tests rules differing in size from the first rule are rejected
    // Verified by skipping mismatched rules
    #[test]
    fn test_load_rule_set_rejects_mismatched_sizes() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        write_rule(dir.path(), "a_FFFFFFFF.png", 3, K);
        write_rule(dir.path(), "b_000000FF.png", 2, K);

        match load_rule_set(dir.path()) {
            Err(CarpetError::MismatchedRuleSize {
                expected,
                found,
                origin,
            }) => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
                assert!(origin.contains("b_000000FF.png"));
            }
            other => unreachable!("Expected MismatchedRuleSize, got {other:?}"),
        }
    }

    // Tests directories without usable rules are rejected
    // Verified by returning an empty rule set
    #[test]
    fn test_load_rule_set_empty_directory() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        write_rule(dir.path(), "no_trigger.png", 1, W);

        assert!(matches!(
            load_rule_set(dir.path()),
            Err(CarpetError::EmptyRuleSet { .. })
        ));
    }

    // Tests missing directories surface as file system errors
    // Verified by treating a missing directory as empty
    #[test]
    fn test_load_rule_set_missing_directory() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };

        assert!(matches!(
            load_rule_set(&dir.path().join("missing")),
            Err(CarpetError::FileSystem { .. })
        ));
    }
}

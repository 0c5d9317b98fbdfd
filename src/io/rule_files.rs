//! Loading rule sets from a directory of PNG files
//!
//! A rule file is a square PNG whose file name contains the trigger color as
//! an `RRGGBBAA` hex quadruple, e.g. `white_FFFFFFFF.png`. Files are read in
//! file name order, which fixes the rule precedence.

use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::analysis::palette::RuleSet;
use crate::analysis::rules::Rule;
use crate::io::configuration::RULE_FILE_EXTENSION;
use crate::io::error::{CarpetError, Result, invalid_rule_file};
use crate::io::image::load_square_pattern;
use crate::spatial::color::{Color, find_color_hex};

/// Trigger color encoded in a rule file name
///
/// # Errors
///
/// Returns an error if the file name holds no `RRGGBBAA` quadruple
pub fn trigger_from_file_name(path: &Path) -> Result<Color> {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    find_color_hex(&file_name).ok_or_else(|| {
        invalid_rule_file(
            path,
            &format!(
                "expected RGBA quadruple in hex like '204060FF' in rule file name; got '{file_name}'"
            ),
        )
    })
}

/// Load a single rule from a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The file name carries no trigger color
/// - The image cannot be decoded or is not square
pub fn load_rule(path: &Path) -> Result<Rule> {
    let trigger = trigger_from_file_name(path)?;
    let pattern = load_square_pattern(path)?;
    Rule::new(trigger, pattern)
}

/// PNG files directly inside `dir`, sorted by file name
///
/// # Errors
///
/// Returns an error if the directory cannot be listed
pub fn collect_rule_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| CarpetError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file()
            && path.extension().and_then(|s| s.to_str()) == Some(RULE_FILE_EXTENSION)
        {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// Load every rule in `dir` into a rule set
///
/// Files without a trigger color in their name are skipped with a warning.
/// The first rule fixes the growth factor for all others.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be read
/// - A rule image cannot be decoded or is not square
/// - A rule's size differs from the first rule's
/// - No usable rule file exists
pub fn load_rule_set(dir: &Path) -> Result<RuleSet> {
    let mut rules: Vec<Rule> = Vec::new();

    for path in collect_rule_files(dir)? {
        let trigger = match trigger_from_file_name(&path) {
            Ok(trigger) => trigger,
            Err(error) => {
                warn!("skipping {}: {error}", path.display());
                continue;
            }
        };
        let rule = Rule::new(trigger, load_square_pattern(&path)?)?;

        if let Some(expected) = rules.first().map(Rule::size)
            && rule.size() != expected
        {
            return Err(CarpetError::MismatchedRuleSize {
                expected,
                found: rule.size(),
                origin: format!("'{}'", path.display()),
            });
        }

        debug!("loaded {} from {}", rule, path.display());
        rules.push(rule);
    }

    if rules.is_empty() {
        return Err(CarpetError::EmptyRuleSet {
            location: format!("directory '{}'", dir.display()),
        });
    }

    info!("{} rules found", rules.len());
    RuleSet::new(rules)
}

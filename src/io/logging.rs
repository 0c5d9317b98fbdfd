//! Log setup and rule set diagnostics

use log::{info, warn};

use crate::analysis::palette::RuleSet;
use crate::io::configuration::COLORS_PER_LOG_LINE;
use crate::spatial::color::{Color, color_hex};

/// Initialize `env_logger` with `info` as the default level
///
/// `RUST_LOG` overrides the default. Calling this more than once is harmless.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .try_init();
}

/// Format colors as hex, `COLORS_PER_LOG_LINE` per indented line
pub fn format_color_list(colors: &[Color]) -> String {
    colors
        .chunks(COLORS_PER_LOG_LINE)
        .map(|line| {
            let hex: Vec<String> = line.iter().map(|&color| color_hex(color)).collect();
            format!("\n  {}", hex.join(" "))
        })
        .collect()
}

/// Log the palette and warn about rules that can never apply
pub fn log_rule_set(rules: &RuleSet) {
    info!(
        "colors found in rules:{}",
        format_color_list(&rules.pattern_colors())
    );

    for index in rules.shadowed_rules() {
        if let Some(rule) = rules.rules().get(index) {
            warn!("rule #{index} ({rule}) is overridden by a later rule with the same trigger");
        }
    }
}

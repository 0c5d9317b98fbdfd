//! Chain-of-responsibility rule resolution
//!
//! Rules are consulted in their given order and every rule whose trigger
//! equals the color claims responsibility, each overriding the previous one.
//! The **last** matching rule therefore wins. Callers control precedence
//! through rule order, so this tie-break is part of the public contract.

use crate::analysis::rules::Rule;
use crate::spatial::color::Color;

/// Resolves a sampled color to the rule responsible for it
pub trait RuleLookup {
    /// The responsible rule, or `None` if no rule triggers on `color`
    fn resolve(&self, color: Color) -> Option<&Rule>;
}

/// Last rule in `rules` whose trigger equals `color`
pub fn resolve_rule(rules: &[Rule], color: Color) -> Option<&Rule> {
    let mut responsible = None;
    for rule in rules {
        if rule.matches(color) {
            responsible = Some(rule);
        }
    }
    responsible
}

impl RuleLookup for [Rule] {
    fn resolve(&self, color: Color) -> Option<&Rule> {
        resolve_rule(self, color)
    }
}

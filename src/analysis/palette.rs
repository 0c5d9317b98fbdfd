//! Ordered rule set and the upfront coverage validation pass
//!
//! The order of rules matters: when several rules share a trigger color, the
//! last one wins (see [`crate::algorithm::lookup`]). Validation runs once,
//! before any pixel is drawn, so an unsatisfiable rule set fails immediately
//! instead of deep into an expensive generation.

use bitvec::prelude::*;
use std::collections::HashSet;

use crate::algorithm::lookup::{RuleLookup, resolve_rule};
use crate::analysis::rules::Rule;
use crate::io::error::{CarpetError, ColorOrigin, Result};
use crate::spatial::color::{Color, pack_color};

/// Ordered, non-empty collection of equally sized rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    growth: usize,
}

impl RuleSet {
    /// Build a rule set, checking that it is non-empty and uniformly sized
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `rules` is empty
    /// - Any rule's side length differs from the first rule's
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        let growth = rules
            .first()
            .map(Rule::size)
            .ok_or_else(|| CarpetError::EmptyRuleSet {
                location: "the rule list".to_string(),
            })?;

        if let Some((index, rule)) = rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.size() != growth)
        {
            return Err(CarpetError::MismatchedRuleSize {
                expected: growth,
                found: rule.size(),
                origin: format!("rule #{index}"),
            });
        }

        Ok(Self { rules, growth })
    }

    /// Shared side length of all rule patterns
    pub const fn growth(&self) -> usize {
        self.growth
    }

    /// Rules in caller-defined order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false`; a rule set holds at least one rule
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Deduplicated colors occurring in any pattern, ordered by packed value
    pub fn pattern_colors(&self) -> Vec<Color> {
        let mut colors: Vec<Color> = self.rules.iter().flat_map(Rule::colors).collect();
        colors.sort_unstable_by_key(|&color| pack_color(color));
        colors.dedup();
        colors
    }

    /// Every color that needs a responsible rule, with where it comes from
    ///
    /// Pattern colors come first, ordered by packed value; the initial color
    /// is appended only if no pattern already contains it.
    pub fn required_colors(&self, initial_color: Color) -> Vec<(Color, ColorOrigin)> {
        let mut required: Vec<(Color, ColorOrigin)> = self
            .pattern_colors()
            .into_iter()
            .map(|color| (color, ColorOrigin::Pattern))
            .collect();

        if !required.iter().any(|&(color, _)| color == initial_color) {
            required.push((initial_color, ColorOrigin::Initial));
        }

        required
    }

    /// Check that every color that can appear during generation has a rule
    ///
    /// # Errors
    ///
    /// Returns [`CarpetError::UncoveredColor`] for the first color, in
    /// [`Self::required_colors`] order, that no rule triggers on
    pub fn validate_coverage(&self, initial_color: Color) -> Result<()> {
        let triggers: HashSet<Color> = self.rules.iter().map(Rule::trigger).collect();

        match self
            .required_colors(initial_color)
            .into_iter()
            .find(|(color, _)| !triggers.contains(color))
        {
            Some((color, origin)) => Err(CarpetError::UncoveredColor { color, origin }),
            None => Ok(()),
        }
    }

    /// Indices of rules that can never apply because a later rule shares their trigger
    pub fn shadowed_rules(&self) -> Vec<usize> {
        let mut shadowed = bitvec![0; self.rules.len()];
        let mut seen: HashSet<Color> = HashSet::new();

        // Walking backwards, any trigger already seen belongs to a later rule
        for (index, rule) in self.rules.iter().enumerate().rev() {
            if !seen.insert(rule.trigger()) {
                shadowed.set(index, true);
            }
        }

        shadowed.iter_ones().collect()
    }
}

impl RuleLookup for RuleSet {
    fn resolve(&self, color: Color) -> Option<&Rule> {
        resolve_rule(&self.rules, color)
    }
}

use std::collections::HashSet;

use tracing::warn;

use super::rule::{RuleSource, RuleSpec, TranslationRule};
use crate::catalogue;
use crate::error::RuleError;

/// An ordered, immutable collection of translation rules.
///
/// Position is priority: the translator tries rules front to back and stops
/// at the first match. Nothing can be added, removed or reordered once the
/// set exists.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<TranslationRule>,
}

impl RuleSet {
    /// Build a set from compiled rules, keeping their order.
    ///
    /// Rule names must be unique. Rules whose templates reference placeholders
    /// their pattern cannot capture are kept, with a warning.
    pub fn new(rules: Vec<TranslationRule>) -> Result<Self, RuleError> {
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            if !seen.insert(rule.name.as_str()) {
                return Err(RuleError::DuplicateName(rule.name.clone()));
            }
            let unbound = rule.unbound_placeholders();
            if !unbound.is_empty() {
                warn!(
                    rule = %rule.name,
                    captures = rule.capture_count(),
                    placeholders = ?unbound,
                    "rule references placeholders its pattern cannot capture"
                );
            }
        }
        Ok(Self { rules })
    }

    /// Compile declarative rule specs in order.
    pub fn from_specs(
        specs: impl IntoIterator<Item = RuleSpec>,
        source: &RuleSource,
    ) -> Result<Self, RuleError> {
        let rules = specs
            .into_iter()
            .map(|spec| TranslationRule::compile(spec, source.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rules)
    }

    /// The compiled-in French catalogue.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::from_specs(catalogue::builtin_specs(), &RuleSource::Builtin)
    }

    /// Iterate over the rules in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &TranslationRule> {
        self.rules.iter()
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&TranslationRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a TranslationRule;
    type IntoIter = std::slice::Iter<'a, TranslationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

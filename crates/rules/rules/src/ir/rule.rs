use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::template::Template;
use crate::error::RuleError;

/// The logical form a rule produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// `∀x (P(x) → Q(x))`.
    Universal,
    /// `∃x (P(x) ∧ Q(x))`.
    Existential,
    /// `P → Q`, with or without predicates.
    Implication,
    /// `P ∧ Q`.
    Conjunction,
    /// `P ∨ Q`.
    Disjunction,
    /// `¬Q(a)`.
    Negation,
    /// `¬∃x (P(x) ∧ Q(x))`.
    ExistentialNegation,
    /// `Q(a)`.
    Predicate,
}

impl RuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Universal => "universal",
            Self::Existential => "existential",
            Self::Implication => "implication",
            Self::Conjunction => "conjunction",
            Self::Disjunction => "disjunction",
            Self::Negation => "negation",
            Self::ExistentialNegation => "existential_negation",
            Self::Predicate => "predicate",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a rule was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleSource {
    /// Part of the compiled-in catalogue.
    Builtin,
    /// Loaded from a YAML file.
    Yaml {
        /// The file path, if available.
        file: Option<String>,
    },
}

/// Declarative form of a translation rule, before its pattern is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Unique, human-readable name.
    pub name: String,
    /// The logical form the rule emits.
    pub kind: RuleKind,
    /// Regular expression searched in the normalized sentence.
    pub pattern: String,
    /// FOL output with `{predicateN}` placeholders.
    pub template: Template,
    /// Explanation text with `{predicateN}` placeholders.
    pub explanation: Template,
    /// Optional note on the linguistic form the rule covers.
    #[serde(default)]
    pub description: Option<String>,
}

impl RuleSpec {
    pub fn new(
        name: impl Into<String>,
        kind: RuleKind,
        pattern: impl Into<String>,
        template: impl Into<Template>,
        explanation: impl Into<Template>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            pattern: pattern.into(),
            template: template.into(),
            explanation: explanation.into(),
            description: None,
        }
    }

    /// Set the description of this rule.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A compiled translation rule: a case-insensitive pattern plus the two
/// templates its captures are substituted into.
#[derive(Debug, Clone)]
pub struct TranslationRule {
    /// Unique, human-readable name.
    pub name: String,
    /// The logical form the rule emits.
    pub kind: RuleKind,
    /// Optional note on the linguistic form the rule covers.
    pub description: Option<String>,
    /// The compiled pattern.
    pub pattern: Regex,
    /// FOL output template.
    pub template: Template,
    /// Explanation template.
    pub explanation: Template,
    /// Where this rule was loaded from.
    pub source: RuleSource,
}

impl TranslationRule {
    /// Compile a [`RuleSpec`].
    ///
    /// Templates that reference more placeholders than the pattern has groups
    /// are accepted; see [`unbound_placeholders`](Self::unbound_placeholders).
    pub fn compile(spec: RuleSpec, source: RuleSource) -> Result<Self, RuleError> {
        let pattern = RegexBuilder::new(&spec.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| RuleError::InvalidRegex {
                rule: spec.name.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            name: spec.name,
            kind: spec.kind,
            description: spec.description,
            pattern,
            template: spec.template,
            explanation: spec.explanation,
            source,
        })
    }

    /// Number of capture groups in the pattern.
    pub fn capture_count(&self) -> usize {
        self.pattern.captures_len() - 1
    }

    /// Search `text` for the pattern and return its groups in order.
    ///
    /// Entry `i` holds group `i + 1`; `None` marks a group that did not
    /// take part in the match.
    pub fn captures<'t>(&self, text: &'t str) -> Option<Vec<Option<&'t str>>> {
        self.pattern.captures(text).map(|caps| {
            caps.iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str()))
                .collect()
        })
    }

    /// Placeholder indices referenced by either template that no capture
    /// group can fill. Such placeholders are rendered verbatim.
    pub fn unbound_placeholders(&self) -> Vec<usize> {
        let groups = self.capture_count();
        let mut unbound: Vec<usize> = self
            .template
            .placeholders()
            .into_iter()
            .chain(self.explanation.placeholders())
            .filter(|&n| n == 0 || n > groups)
            .collect();
        unbound.sort_unstable();
        unbound.dedup();
        unbound
    }

    /// The declarative form of this rule.
    pub fn to_spec(&self) -> RuleSpec {
        RuleSpec {
            name: self.name.clone(),
            kind: self.kind,
            pattern: self.pattern.as_str().to_owned(),
            template: self.template.clone(),
            explanation: self.explanation.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conjunction() -> RuleSpec {
        RuleSpec::new(
            "conjunction",
            RuleKind::Conjunction,
            r"(\w+) et (\w+)",
            "{predicate1} ∧ {predicate2}",
            "Conjonction logique : {predicate1} et {predicate2}",
        )
    }

    #[test]
    fn rule_construction() {
        let rule = TranslationRule::compile(
            conjunction().with_description("X et Y"),
            RuleSource::Builtin,
        )
        .unwrap();

        assert_eq!(rule.name, "conjunction");
        assert_eq!(rule.kind, RuleKind::Conjunction);
        assert_eq!(rule.description.as_deref(), Some("X et Y"));
        assert_eq!(rule.source, RuleSource::Builtin);
        assert_eq!(rule.capture_count(), 2);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let spec = RuleSpec::new("broken", RuleKind::Predicate, r"(\w+", "{predicate1}", "");
        let err = TranslationRule::compile(spec, RuleSource::Builtin).unwrap_err();
        assert!(matches!(err, RuleError::InvalidRegex { ref rule, .. } if rule == "broken"));
    }

    #[test]
    fn captures_search_anywhere() {
        let rule = TranslationRule::compile(conjunction(), RuleSource::Builtin).unwrap();
        let caps = rule.captures("hier pierre et marie sont venus").unwrap();
        assert_eq!(caps, vec![Some("pierre"), Some("marie")]);
        assert!(rule.captures("pierre ou marie").is_none());
    }

    #[test]
    fn captures_are_case_insensitive() {
        let rule = TranslationRule::compile(conjunction(), RuleSource::Builtin).unwrap();
        let caps = rule.captures("Pierre ET Marie").unwrap();
        assert_eq!(caps, vec![Some("Pierre"), Some("Marie")]);
    }

    #[test]
    fn captures_report_non_participating_groups() {
        let spec = RuleSpec::new(
            "optional",
            RuleKind::Predicate,
            r"(\w+) est (tr[eè]s )?(\w+)",
            "{predicate3}({predicate1})",
            "",
        );
        let rule = TranslationRule::compile(spec, RuleSource::Builtin).unwrap();
        let caps = rule.captures("paul est grand").unwrap();
        assert_eq!(caps, vec![Some("paul"), None, Some("grand")]);
    }

    #[test]
    fn unbound_placeholders_detected() {
        let spec = RuleSpec::new(
            "too-many",
            RuleKind::Predicate,
            r"(\w+) est (\w+)",
            "{predicate2}({predicate1}) ∧ {predicate3}",
            "{predicate4} {predicate0}",
        );
        let rule = TranslationRule::compile(spec, RuleSource::Builtin).unwrap();
        assert_eq!(rule.unbound_placeholders(), vec![0, 3, 4]);

        let ok = TranslationRule::compile(conjunction(), RuleSource::Builtin).unwrap();
        assert!(ok.unbound_placeholders().is_empty());
    }

    #[test]
    fn to_spec_preserves_fields() {
        let spec = conjunction().with_description("X et Y");
        let rule = TranslationRule::compile(spec.clone(), RuleSource::Builtin).unwrap();
        assert_eq!(rule.to_spec(), spec);
    }

    #[test]
    fn rule_kind_serde_snake_case() {
        let json = serde_json::to_string(&RuleKind::ExistentialNegation).unwrap();
        assert_eq!(json, r#""existential_negation""#);
        let back: RuleKind = serde_json::from_str(r#""universal""#).unwrap();
        assert_eq!(back, RuleKind::Universal);
        assert_eq!(RuleKind::Predicate.to_string(), "predicate");
    }

    #[test]
    fn rule_spec_description_defaults_to_none() {
        let json = r#"{
            "name": "p",
            "kind": "predicate",
            "pattern": "(\\w+) est (\\w+)",
            "template": "{predicate2}({predicate1})",
            "explanation": "x"
        }"#;
        let spec: RuleSpec = serde_json::from_str(json).unwrap();
        assert!(spec.description.is_none());
        assert_eq!(spec.kind, RuleKind::Predicate);
    }
}

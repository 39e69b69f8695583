use serde::Deserialize;

use predicat_rules::RuleKind;

/// Returns the default value `true` for serde.
const fn default_true() -> bool {
    true
}

/// Top-level YAML rule file containing a list of rules.
#[derive(Debug, Deserialize)]
pub struct YamlRuleFile {
    /// The rules, in priority order.
    pub rules: Vec<YamlRule>,
}

/// A single rule as represented in YAML.
#[derive(Debug, Deserialize)]
pub struct YamlRule {
    /// A human-readable name for the rule.
    pub name: String,
    /// The logical form the rule emits.
    pub kind: RuleKind,
    /// Regular expression searched in the normalized sentence.
    pub pattern: String,
    /// FOL output with `{predicateN}` placeholders.
    pub template: String,
    /// Explanation with `{predicateN}` placeholders.
    pub explanation: String,
    /// Optional description of what this rule covers.
    pub description: Option<String>,
    /// Whether the rule is loaded. Defaults to `true`.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

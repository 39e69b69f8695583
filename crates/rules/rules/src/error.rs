use thiserror::Error;

/// Errors that can occur while loading or compiling translation rules.
///
/// Translating a sentence never fails; these only surface when a rule set
/// is built.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A parse error when loading rules from a frontend.
    #[error("parse error: {0}")]
    Parse(String),

    /// A rule pattern is not a valid regular expression.
    #[error("invalid regex in rule '{rule}': {message}")]
    InvalidRegex {
        /// Name of the offending rule.
        rule: String,
        /// Error reported by the regex compiler.
        message: String,
    },

    /// Two rules in the same set share a name.
    #[error("duplicate rule name: {0}")]
    DuplicateName(String),
}

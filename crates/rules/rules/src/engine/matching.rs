use crate::ir::rule::TranslationRule;

/// The first rule that matched a normalized sentence, with its captures.
#[derive(Debug, Clone)]
pub struct RuleMatch<'a> {
    /// The winning rule.
    pub rule: &'a TranslationRule,
    /// Zero-based position of the rule in its set.
    pub position: usize,
    /// Capture groups in order; `None` for a group that did not participate.
    pub captures: Vec<Option<&'a str>>,
}

impl RuleMatch<'_> {
    /// The rule's FOL template with the captures substituted.
    pub fn translation(&self) -> String {
        self.rule.template.render(&self.captures)
    }

    /// The rule's explanation template with the captures substituted.
    pub fn explanation(&self) -> String {
        self.rule.explanation.render(&self.captures)
    }
}

use std::path::Path;

use crate::error::RuleError;
use crate::ir::rule::{RuleSource, TranslationRule};
use crate::ir::set::RuleSet;

/// A source format that rule files can be written in.
///
/// Implementors only turn text into rules; reading the file, checking its
/// extension and building the ordered [`RuleSet`] happen in [`load`](Self::load).
pub trait RuleFrontend: Send + Sync {
    /// Lower-case file extensions this format is read from.
    fn extensions(&self) -> &[&str];

    /// Provenance recorded on rules read from `file`, or from inline text
    /// when `file` is `None`.
    fn source(&self, file: Option<&Path>) -> RuleSource;

    /// Compile `content` into rules, in document order.
    fn parse_with_source(
        &self,
        content: &str,
        source: &RuleSource,
    ) -> Result<Vec<TranslationRule>, RuleError>;

    /// Compile inline text.
    fn parse(&self, content: &str) -> Result<Vec<TranslationRule>, RuleError> {
        self.parse_with_source(content, &self.source(None))
    }

    /// Whether `path` carries one of [`extensions`](Self::extensions).
    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }

    /// Read a rule file into an immutable [`RuleSet`].
    ///
    /// Files with an extension this format does not claim are refused
    /// before they are read.
    fn load(&self, path: &Path) -> Result<RuleSet, RuleError> {
        if !self.accepts(path) {
            return Err(RuleError::Parse(format!(
                "{} is not a rule file (expected .{})",
                path.display(),
                self.extensions().join(" or .")
            )));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| RuleError::Parse(format!("cannot read {}: {e}", path.display())))?;
        let rules = self
            .parse_with_source(&content, &self.source(Some(path)))
            .map_err(|e| match e {
                RuleError::Parse(msg) => RuleError::Parse(format!("{}: {msg}", path.display())),
                other => other,
            })?;
        RuleSet::new(rules)
    }
}

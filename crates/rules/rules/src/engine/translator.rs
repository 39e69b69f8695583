use tracing::debug;

use predicat_core::{SymbolTable, TranslationResult, trim_sentence};

use super::matching::RuleMatch;
use crate::error::RuleError;
use crate::ir::set::RuleSet;

/// Lower-case and trim a sentence. The result is what rules are matched
/// against and what is echoed back as `original_sentence`.
///
/// Trimming uses [`trim_sentence`], so the information separators
/// U+001C..=U+001F are stripped along with ordinary whitespace.
pub fn normalize(sentence: &str) -> String {
    trim_sentence(&sentence.to_lowercase()).to_owned()
}

/// Translates sentences into first-order logic with an ordered rule set.
///
/// Rules are tried in set order and the first whose pattern is found in the
/// normalized sentence wins; there is no scoring and no backtracking. When
/// nothing matches the translator returns [`TranslationResult::fallback`].
///
/// The translator holds no mutable state. Build it once at startup and share
/// it (e.g. behind an `Arc`) between any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct Translator {
    rules: RuleSet,
    symbols: SymbolTable,
}

impl Translator {
    pub fn new(rules: RuleSet, symbols: SymbolTable) -> Self {
        Self { rules, symbols }
    }

    /// The built-in French catalogue with the standard symbol table.
    pub fn builtin() -> Result<Self, RuleError> {
        Ok(Self::new(RuleSet::builtin()?, SymbolTable::standard()))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Translate a sentence. Never fails: unmatched input yields the
    /// fallback result.
    pub fn translate(&self, sentence: &str) -> TranslationResult {
        let normalized = normalize(sentence);

        let rendered = self.find_match(&normalized).map(|found| {
            debug!(
                rule = %found.rule.name,
                kind = %found.rule.kind,
                position = found.position,
                "rule matched"
            );
            (found.translation(), found.explanation())
        });

        let Some((fol_translation, explanation)) = rendered else {
            debug!(sentence = %normalized, "no rule matched, returning fallback");
            return TranslationResult::fallback(normalized);
        };

        let symbols_used = self.symbols.glyphs_in(&fol_translation);

        TranslationResult {
            original_sentence: normalized,
            fol_translation,
            explanation,
            symbols_used,
        }
    }

    /// Return the first rule whose pattern occurs in `normalized`.
    ///
    /// Callers that start from raw input should pass it through
    /// [`normalize`] first.
    pub fn find_match<'a>(&'a self, normalized: &'a str) -> Option<RuleMatch<'a>> {
        self.rules
            .iter()
            .enumerate()
            .find_map(|(position, rule)| {
                rule.captures(normalized).map(|captures| RuleMatch {
                    rule,
                    position,
                    captures,
                })
            })
    }
}

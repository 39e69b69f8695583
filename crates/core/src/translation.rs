use serde::{Deserialize, Serialize};

/// Marker placed in [`TranslationResult::fol_translation`] when no rule matched.
pub const FALLBACK_TRANSLATION: &str = "[Traduction non disponible - phrase trop complexe]";

/// Guidance placed in [`TranslationResult::explanation`] when no rule matched.
pub const FALLBACK_EXPLANATION: &str = "Cette phrase ne correspond à aucun pattern de traduction connu. Essayez des phrases plus simples comme 'Tous les hommes sont mortels' ou 'Il existe un chat noir'.";

/// Message returned when a sentence is empty or only whitespace.
pub const EMPTY_SENTENCE_MESSAGE: &str = "La phrase ne peut pas être vide";

/// A sentence submitted for translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TranslationRequest {
    /// French sentence to translate.
    #[cfg_attr(feature = "openapi", schema(example = "Tous les hommes sont mortels"))]
    pub sentence: String,
}

impl TranslationRequest {
    pub fn new(sentence: impl Into<String>) -> Self {
        Self {
            sentence: sentence.into(),
        }
    }

    /// Whether the sentence has no content besides whitespace.
    pub fn is_blank(&self) -> bool {
        trim_sentence(&self.sentence).is_empty()
    }
}

/// Whether `c` separates words in a sentence.
///
/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F,
/// which clients treat as blanks too.
pub fn is_sentence_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip leading and trailing [`is_sentence_space`] characters.
pub fn trim_sentence(sentence: &str) -> &str {
    sentence.trim_matches(is_sentence_space)
}

/// The outcome of translating one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TranslationResult {
    /// The input after normalization (lower-cased and trimmed).
    #[cfg_attr(feature = "openapi", schema(example = "tous les hommes sont mortels"))]
    pub original_sentence: String,
    /// The first-order logic formula, or the fallback marker.
    #[cfg_attr(feature = "openapi", schema(example = "∀x (hommes(x) → mortels(x))"))]
    pub fol_translation: String,
    /// Human-readable rationale for the translation.
    pub explanation: String,
    /// Glyphs of the symbol table that appear in `fol_translation`, in table order.
    #[cfg_attr(feature = "openapi", schema(example = json!(["∀", "→"])))]
    pub symbols_used: Vec<String>,
}

impl TranslationResult {
    /// The sentinel result returned when no rule matches `original_sentence`.
    pub fn fallback(original_sentence: impl Into<String>) -> Self {
        Self {
            original_sentence: original_sentence.into(),
            fol_translation: FALLBACK_TRANSLATION.to_owned(),
            explanation: FALLBACK_EXPLANATION.to_owned(),
            symbols_used: Vec::new(),
        }
    }

    /// Whether this is the no-match sentinel.
    pub fn is_fallback(&self) -> bool {
        self.fol_translation == FALLBACK_TRANSLATION && self.symbols_used.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_fields() {
        let result = TranslationResult::fallback("xyz");
        assert_eq!(result.original_sentence, "xyz");
        assert_eq!(result.fol_translation, FALLBACK_TRANSLATION);
        assert_eq!(result.explanation, FALLBACK_EXPLANATION);
        assert!(result.symbols_used.is_empty());
        assert!(result.is_fallback());
    }

    #[test]
    fn translated_result_is_not_fallback() {
        let result = TranslationResult {
            original_sentence: "socrate est philosophe".into(),
            fol_translation: "philosophe(socrate)".into(),
            explanation: "Prédicat simple".into(),
            symbols_used: vec![],
        };
        assert!(!result.is_fallback());
    }

    #[test]
    fn blank_requests() {
        assert!(TranslationRequest::new("").is_blank());
        assert!(TranslationRequest::new(" \t\n ").is_blank());
        assert!(!TranslationRequest::new(" a ").is_blank());
        assert!(TranslationRequest::new("\u{1c}\u{1d}\u{1e}\u{1f}").is_blank());
        assert!(TranslationRequest::new("\u{a0}\u{3000}").is_blank());
    }

    #[test]
    fn trim_sentence_strips_separators_only_at_the_ends() {
        assert_eq!(trim_sentence("\u{1f} a\u{1c}b \n"), "a\u{1c}b");
        assert_eq!(trim_sentence("\u{85}socrate\u{2028}"), "socrate");
        assert_eq!(trim_sentence("zéro"), "zéro");
    }

    #[test]
    fn wire_field_names() {
        let result = TranslationResult::fallback("xyz");
        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj.contains_key("original_sentence"));
        assert!(obj.contains_key("fol_translation"));
        assert!(obj.contains_key("explanation"));
        assert_eq!(json["symbols_used"], serde_json::json!([]));
    }
}

pub mod examples;
pub mod symbols;
pub mod translation;

pub use examples::{Example, canonical_examples};
pub use symbols::{Symbol, SymbolTable};
pub use translation::{
    EMPTY_SENTENCE_MESSAGE, FALLBACK_EXPLANATION, FALLBACK_TRANSLATION, TranslationRequest,
    TranslationResult, is_sentence_space, trim_sentence,
};

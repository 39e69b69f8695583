pub mod matching;
pub mod translator;

pub use matching::RuleMatch;
pub use translator::{Translator, normalize};

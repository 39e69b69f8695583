pub mod catalogue;
pub mod engine;
pub mod error;
pub mod frontend;
pub mod ir;

pub use engine::{RuleMatch, Translator, normalize};
pub use error::RuleError;
pub use frontend::RuleFrontend;
pub use ir::rule::{RuleKind, RuleSource, RuleSpec, TranslationRule};
pub use ir::set::RuleSet;
pub use ir::template::Template;

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Args;
use predicat_client::PredicatClient;
use predicat_core::{EMPTY_SENTENCE_MESSAGE, SymbolTable, TranslationResult, trim_sentence};
use predicat_rules::{RuleFrontend, RuleSet, Translator};
use predicat_rules_yaml::YamlFrontend;
use tracing::debug;

use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// The sentence to translate. Words are joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Translate in-process instead of calling the server.
    #[arg(long)]
    pub local: bool,

    /// YAML rule file replacing the built-in catalogue.
    #[arg(long, requires = "local")]
    pub rules: Option<PathBuf>,
}

impl TranslateArgs {
    pub fn sentence(&self) -> String {
        self.words.join(" ")
    }
}

pub async fn run(
    client: &PredicatClient,
    args: &TranslateArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let sentence = args.sentence();
    if trim_sentence(&sentence).is_empty() {
        bail!(EMPTY_SENTENCE_MESSAGE);
    }

    let result = if args.local {
        let translator = local_translator(args.rules.as_deref())?;
        translator.translate(&sentence)
    } else {
        client.translate(&sentence).await?
    };

    print_result(&result, format)
}

/// Build an in-process translator from the built-in catalogue or a YAML file.
pub fn local_translator(rules: Option<&Path>) -> anyhow::Result<Translator> {
    let set = match rules {
        Some(path) => YamlFrontend
            .load(path)
            .with_context(|| format!("failed to load rules from {}", path.display()))?,
        None => RuleSet::builtin()?,
    };
    debug!(rules = set.len(), "local translator ready");
    Ok(Translator::new(set, SymbolTable::standard()))
}

fn print_result(result: &TranslationResult, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Text => println!("{}", render_text(result)),
    }
    Ok(())
}

fn render_text(result: &TranslationResult) -> String {
    let mut out = format!(
        "sentence:    {}\nformula:     {}\nexplanation: {}",
        result.original_sentence, result.fol_translation, result.explanation
    );
    if !result.symbols_used.is_empty() {
        out.push_str("\nsymbols:     ");
        out.push_str(&result.symbols_used.join(" "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_builtin_translation() {
        let translator = local_translator(None).unwrap();
        let result = translator.translate("Si Paul est intelligent alors il est riche");
        assert_eq!(result.fol_translation, "intelligent(paul) → riche(paul)");
    }

    #[test]
    fn local_missing_rules_file_fails() {
        let err = local_translator(Some(Path::new("/nonexistent/rules.yaml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rules.yaml"));
    }

    #[test]
    fn text_rendering() {
        let translator = local_translator(None).unwrap();
        let text = render_text(&translator.translate("Il existe un chat noir"));
        assert_eq!(
            text,
            "sentence:    il existe un chat noir\n\
             formula:     ∃x (chat(x) ∧ noir(x))\n\
             explanation: Quantification existentielle : Il existe un x tel que x est chat et x est noir\n\
             symbols:     ∃ ∧"
        );

        let text = render_text(&translator.translate("bonjour"));
        assert!(!text.contains("symbols:"));
    }
}

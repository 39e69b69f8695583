use std::path::Path;

use tracing::debug;

use predicat_rules::{RuleError, RuleFrontend, RuleSource, RuleSpec, TranslationRule};

use crate::parser::{YamlRule, YamlRuleFile};

/// A [`RuleFrontend`] implementation that parses YAML rule files into
/// compiled translation rules.
///
/// Rules keep their file order. Entries with `enabled: false` are dropped
/// at load time. Load files with [`RuleFrontend::load`].
pub struct YamlFrontend;

impl RuleFrontend for YamlFrontend {
    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn source(&self, file: Option<&Path>) -> RuleSource {
        RuleSource::Yaml {
            file: file.map(|p| p.display().to_string()),
        }
    }

    fn parse_with_source(
        &self,
        content: &str,
        source: &RuleSource,
    ) -> Result<Vec<TranslationRule>, RuleError> {
        let file: YamlRuleFile = serde_yaml_ng::from_str(content)
            .map_err(|e| RuleError::Parse(format!("YAML parse error: {e}")))?;

        file.rules
            .into_iter()
            .filter(|rule| {
                if !rule.enabled {
                    debug!(rule = %rule.name, "skipping disabled rule");
                }
                rule.enabled
            })
            .map(|rule| TranslationRule::compile(to_spec(rule), source.clone()))
            .collect()
    }
}

fn to_spec(yaml: YamlRule) -> RuleSpec {
    let spec = RuleSpec::new(
        yaml.name,
        yaml.kind,
        yaml.pattern,
        yaml.template,
        yaml.explanation,
    );
    match yaml.description {
        Some(description) => spec.with_description(description),
        None => spec,
    }
}

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Rule loading configuration.
#[derive(Debug, Default, Deserialize)]
pub struct RulesConfig {
    /// Optional path to a YAML rule file replacing the built-in catalogue.
    ///
    /// Relative paths are resolved against the directory of the
    /// configuration file.
    pub path: Option<String>,
}

impl RulesConfig {
    /// Resolve the rule file path relative to the configuration file.
    pub fn resolve(&self, config_path: &Path) -> Option<PathBuf> {
        let rules_path = Path::new(self.path.as_deref()?);
        if rules_path.is_relative() {
            Some(
                config_path
                    .parent()
                    .unwrap_or(Path::new("."))
                    .join(rules_path),
            )
        } else {
            Some(rules_path.to_path_buf())
        }
    }
}

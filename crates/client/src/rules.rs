use serde::{Deserialize, Serialize};

use crate::{Error, PredicatClient};

/// A loaded translation rule, as listed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    /// Zero-based priority; lower positions are tried first.
    pub position: usize,
    /// Rule name.
    pub name: String,
    /// Logical form the rule emits (e.g. `universal`).
    pub kind: String,
    /// Regular expression searched in the normalized sentence.
    pub pattern: String,
    /// FOL output template.
    pub template: String,
    /// Explanation template.
    pub explanation: String,
    /// Optional rule description.
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RulesBody {
    rules: Vec<RuleInfo>,
}

impl PredicatClient {
    /// List the server's translation rules in priority order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), predicat_client::Error> {
    /// use predicat_client::PredicatClient;
    ///
    /// let client = PredicatClient::new("http://localhost:8001")?;
    /// for rule in client.rules().await? {
    ///     println!("{} {}", rule.position, rule.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn rules(&self) -> Result<Vec<RuleInfo>, Error> {
        let body: RulesBody = self.get_json("/api/rules").await?;
        Ok(body.rules)
    }
}

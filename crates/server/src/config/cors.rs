use serde::Deserialize;

/// Cross-origin resource sharing policy.
///
/// # Example
///
/// ```toml
/// [cors]
/// allowed_origins = ["https://logic.example.com"]
/// ```
#[derive(Debug, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API. `"*"` allows any origin.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Whether every origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_owned()]
}

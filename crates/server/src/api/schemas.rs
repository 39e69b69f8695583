use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use predicat_core::{Example, SymbolTable};

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status indicator.
    #[schema(example = "ok")]
    pub status: String,
    /// Number of loaded translation rules.
    #[schema(example = 13)]
    pub rules: usize,
}

/// Liveness message served at the API root.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InfoResponse {
    #[schema(example = "Traducteur de Logique de Premier Ordre - API Active")]
    pub message: String,
}

/// The symbol table together with a short description.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SymbolsResponse {
    /// Symbol name to glyph, in table order.
    #[schema(value_type = Object, example = json!({"forall": "∀", "exists": "∃", "implies": "→"}))]
    pub symbols: SymbolTable,
    pub description: String,
}

/// Illustrative sentences with their translations.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExamplesResponse {
    pub examples: Vec<Example>,
}

/// One entry of the rule catalogue.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RuleSummary {
    /// Zero-based priority; lower positions are tried first.
    #[schema(example = 0)]
    pub position: usize,
    #[schema(example = "universal-plural")]
    pub name: String,
    #[schema(example = "universal")]
    pub kind: String,
    #[schema(example = "tous? les? (\\w+) sont (\\w+)")]
    pub pattern: String,
    #[schema(example = "∀x ({predicate1}(x) → {predicate2}(x))")]
    pub template: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The loaded rule catalogue in priority order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RulesResponse {
    pub rules: Vec<RuleSummary>,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    #[schema(example = "La phrase ne peut pas être vide")]
    pub error: String,
}

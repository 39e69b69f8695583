pub mod examples;
pub mod health;
pub mod openapi;
pub mod rules;
pub mod schemas;
pub mod symbols;
pub mod translate;

use std::any::Any;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use predicat_core::SymbolTable;
use predicat_rules::{RuleFrontend, RuleSet, Translator};
use predicat_rules_yaml::YamlFrontend;
use tracing::info;

use crate::config::{CorsConfig, RulesConfig};
use crate::error::ServerError;

use self::openapi::ApiDoc;

/// Shared application state passed to all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The translator, built once at startup.
    pub translator: Arc<Translator>,
}

impl AppState {
    pub fn new(translator: Translator) -> Self {
        Self {
            translator: Arc::new(translator),
        }
    }

    /// Build the state from the `[rules]` section.
    ///
    /// A configured YAML file replaces the built-in catalogue entirely.
    /// Relative paths resolve against the directory of `config_path`.
    pub fn from_rules_config(rules: &RulesConfig, config_path: &Path) -> Result<Self, ServerError> {
        let set = match rules.resolve(config_path) {
            Some(path) => {
                let set = YamlFrontend.load(&path)?;
                info!(path = %path.display(), rules = set.len(), "loaded rules from YAML");
                set
            }
            None => {
                let set = RuleSet::builtin()?;
                info!(rules = set.len(), "loaded built-in rule catalogue");
                set
            }
        };
        Ok(Self::new(Translator::new(set, SymbolTable::standard())))
    }
}

/// Build the Axum router with all API routes, middleware, and Swagger UI.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api", get(health::info))
        .route("/api/", get(health::info))
        .route("/api/translate", post(translate::translate))
        .route("/api/symbols", get(symbols::symbols))
        .route("/api/examples", get(examples::examples))
        .route("/api/rules", get(rules::list_rules))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Build the CORS layer for the configured origins.
///
/// A `"*"` entry allows every origin, method and header.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ServerError> {
    if config.allows_any_origin() {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| ServerError::Config(format!("invalid CORS origin '{origin}': {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(cors::Any)
        .allow_headers(cors::Any))
}

/// Map a handler panic to a 500 with the usual error body.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "unknown panic".to_owned()
    };
    tracing::error!(detail = %detail, "handler panicked");
    ServerError::Internal(format!("Erreur lors de la traduction: {detail}")).into_response()
}

#![allow(clippy::needless_for_each)]

use predicat_core::{Example, TranslationRequest, TranslationResult};

use super::schemas::{
    ErrorResponse, ExamplesResponse, HealthResponse, InfoResponse, RuleSummary, RulesResponse,
    SymbolsResponse,
};

#[derive(utoipa::OpenApi)]
#[openapi(
    info(
        title = "Predicat API",
        version = "0.1.0",
        description = "HTTP API translating simple French sentences into first-order logic.",
        license(name = "Apache-2.0")
    ),
    tags(
        (name = "Health", description = "Service liveness and status"),
        (name = "Translation", description = "Sentence translation and reference data"),
        (name = "Rules", description = "Loaded translation rules")
    ),
    paths(
        super::health::health,
        super::health::info,
        super::translate::translate,
        super::symbols::symbols,
        super::examples::examples,
        super::rules::list_rules,
    ),
    components(schemas(
        TranslationRequest,
        TranslationResult,
        Example,
        HealthResponse,
        InfoResponse,
        SymbolsResponse,
        ExamplesResponse,
        RuleSummary,
        RulesResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

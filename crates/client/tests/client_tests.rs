use tower_http::cors::CorsLayer;

use predicat_client::{Error, PredicatClient};
use predicat_core::{FALLBACK_TRANSLATION, SymbolTable};
use predicat_rules::Translator;
use predicat_server::api::{AppState, router};

/// Serve the built-in catalogue on an ephemeral port and return its URL.
async fn spawn_server() -> String {
    let state = AppState::new(Translator::builtin().unwrap());
    let app = router(state, CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_and_info() {
    let client = PredicatClient::new(spawn_server().await).unwrap();

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.rules, 13);

    assert_eq!(
        client.info().await.unwrap(),
        "Traducteur de Logique de Premier Ordre - API Active"
    );
}

#[tokio::test]
async fn translate_sentences() {
    let client = PredicatClient::new(spawn_server().await).unwrap();

    let result = client.translate("Certains oiseaux sont noirs").await.unwrap();
    assert_eq!(result.fol_translation, "∃x (oiseaux(x) ∧ noirs(x))");
    assert_eq!(result.symbols_used, vec!["∃", "∧"]);

    let result = client.translate("Pierre ou Marie").await.unwrap();
    assert_eq!(result.fol_translation, "pierre ∨ marie");

    let result = client.translate("xyz").await.unwrap();
    assert_eq!(result.fol_translation, FALLBACK_TRANSLATION);
    assert!(result.is_fallback());
}

#[tokio::test]
async fn reference_data() {
    let client = PredicatClient::new(spawn_server().await).unwrap();

    let symbols = client.symbols().await.unwrap();
    let standard = SymbolTable::standard();
    let expected: Vec<&str> = standard.glyphs().collect();
    assert_eq!(symbols.glyphs().collect::<Vec<_>>(), expected);

    let examples = client.examples().await.unwrap();
    assert_eq!(examples.len(), 5);
    assert_eq!(examples[3].sentence, "Socrate est philosophe");

    let rules = client.rules().await.unwrap();
    assert_eq!(rules.len(), 13);
    assert_eq!(rules[6].name, "implication");
    assert_eq!(rules[7].name, "implication-predicates");
}

#[tokio::test]
async fn unreachable_server_is_connection_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = PredicatClient::new(format!("http://{addr}")).unwrap();
    let err = client.health().await.unwrap_err();
    assert!(matches!(err, Error::Connection(_)), "unexpected error: {err:?}");
}

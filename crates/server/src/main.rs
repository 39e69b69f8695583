use std::future::IntoFuture;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::Notify;
use tracing::{info, warn};

use predicat_server::api::{self, AppState};
use predicat_server::config::PredicatConfig;

/// First-order logic translator HTTP server.
#[derive(Parser, Debug)]
#[command(
    name = "predicat-server",
    about = "HTTP server translating French sentences into first-order logic"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "predicat.toml")]
    config: String,

    /// Override the bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = Path::new(&cli.config);
    let config = PredicatConfig::load(config_path)?;

    let telemetry_guard = predicat_server::telemetry::init(&config.telemetry);
    if !config_path.exists() {
        info!(path = %config_path.display(), "configuration file not found, using defaults");
    }

    let state = AppState::from_rules_config(&config.rules, config_path)?;
    let cors = api::cors_layer(&config.cors)?;
    let app = api::router(state, cors);

    // CLI overrides take precedence.
    let host = cli.host.unwrap_or(config.server.host);
    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "predicat-server listening");

    // Once a signal arrives, in-flight requests get at most the shutdown
    // timeout to complete.
    let signalled = Arc::new(Notify::new());
    let notify = Arc::clone(&signalled);
    let serve = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            notify.notify_one();
        })
        .into_future();
    tokio::pin!(serve);

    tokio::select! {
        result = &mut serve => result?,
        () = signalled.notified() => {
            let timeout_secs = config.server.shutdown_timeout_seconds;
            info!(timeout_secs, "draining in-flight requests...");
            match tokio::time::timeout(Duration::from_secs(timeout_secs), &mut serve).await {
                Ok(result) => result?,
                Err(_) => warn!(timeout_secs, "shutdown timeout exceeded, dropping open connections"),
            }
        }
    }

    // Flush pending OpenTelemetry spans before exit.
    telemetry_guard.shutdown();

    info!("predicat-server shut down");
    Ok(())
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!("received SIGINT"); }
        () = terminate => { info!("received SIGTERM"); }
    }
}

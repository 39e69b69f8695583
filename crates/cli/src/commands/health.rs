use anyhow::Context;
use predicat_client::PredicatClient;

use crate::OutputFormat;

pub async fn run(client: &PredicatClient, format: &OutputFormat) -> anyhow::Result<()> {
    let health = client
        .health()
        .await
        .with_context(|| format!("failed to reach server at {}", client.base_url()))?;

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "status": health.status, "rules": health.rules })
        ),
        OutputFormat::Text => println!(
            "predicat server is {} ({} rules loaded).",
            health.status, health.rules
        ),
    }
    Ok(())
}

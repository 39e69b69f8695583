use predicat_client::PredicatClient;

use crate::OutputFormat;

pub async fn run(client: &PredicatClient, format: &OutputFormat) -> anyhow::Result<()> {
    let rules = client.rules().await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rules)?),
        OutputFormat::Text => {
            println!("{} rules loaded:", rules.len());
            for rule in &rules {
                let desc = rule.description.as_deref().unwrap_or("");
                println!(
                    "  {position:>2}. {name} ({kind}) {desc}",
                    position = rule.position,
                    name = rule.name,
                    kind = rule.kind,
                );
            }
        }
    }
    Ok(())
}

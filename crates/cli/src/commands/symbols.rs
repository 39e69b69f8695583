use predicat_client::PredicatClient;

use crate::OutputFormat;

pub async fn run(client: &PredicatClient, format: &OutputFormat) -> anyhow::Result<()> {
    let symbols = client.symbols().await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&symbols)?),
        OutputFormat::Text => {
            for symbol in &symbols {
                println!("  {}  {}", symbol.glyph, symbol.name);
            }
        }
    }
    Ok(())
}

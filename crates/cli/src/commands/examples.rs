use predicat_client::PredicatClient;

use crate::OutputFormat;

pub async fn run(client: &PredicatClient, format: &OutputFormat) -> anyhow::Result<()> {
    let examples = client.examples().await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&examples)?),
        OutputFormat::Text => {
            for (i, example) in examples.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", example.sentence);
                println!("  {}", example.translation);
                println!("  {}", example.explanation);
            }
        }
    }
    Ok(())
}

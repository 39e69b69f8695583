//! Predicat CLI
//!
//! Translate French sentences into first-order logic, locally or through a
//! running predicat server.

mod commands;

use clap::{Parser, Subcommand};
use predicat_client::PredicatClient;
use tracing_subscriber::{EnvFilter, fmt};

/// Predicat CLI: translate French sentences into first-order logic.
#[derive(Parser, Debug)]
#[command(name = "predicat", version, about)]
struct Cli {
    /// Predicat server endpoint URL.
    #[arg(
        long,
        env = "PREDICAT_ENDPOINT",
        default_value = "http://localhost:8001",
        global = true
    )]
    endpoint: String,

    /// Output format.
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate a sentence.
    Translate(commands::translate::TranslateArgs),
    /// Show the logic symbol table.
    Symbols,
    /// Show example sentences with their translations.
    Examples,
    /// List the server's translation rules.
    Rules,
    /// Check server health.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = PredicatClient::new(&cli.endpoint)?;

    match cli.command {
        Command::Translate(args) => commands::translate::run(&client, &args, &cli.format).await,
        Command::Symbols => commands::symbols::run(&client, &cli.format).await,
        Command::Examples => commands::examples::run(&client, &cli.format).await,
        Command::Rules => commands::rules::run(&client, &cli.format).await,
        Command::Health => commands::health::run(&client, &cli.format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_translate_words() {
        let cli = Cli::try_parse_from([
            "predicat",
            "translate",
            "Tous",
            "les",
            "hommes",
            "sont",
            "mortels",
        ])
        .unwrap();
        let Command::Translate(args) = cli.command else {
            panic!("expected translate");
        };
        assert_eq!(args.sentence(), "Tous les hommes sont mortels");
        assert!(!args.local);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "predicat",
            "symbols",
            "--format",
            "json",
            "--endpoint",
            "http://logic:9000",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Symbols));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.endpoint, "http://logic:9000");
    }

    #[test]
    fn rules_file_requires_local() {
        assert!(
            Cli::try_parse_from(["predicat", "translate", "--rules", "r.yaml", "a", "est", "b"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from([
                "predicat", "translate", "--local", "--rules", "r.yaml", "a", "est", "b"
            ])
            .is_ok()
        );
    }

    #[test]
    fn translate_needs_a_sentence() {
        assert!(Cli::try_parse_from(["predicat", "translate"]).is_err());
    }
}

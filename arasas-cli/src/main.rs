//! Command-line entry point for arasas

use arasas_cli::commands::Commands;
use arasas_cli::CliResult;
use clap::Parser;

/// Semantic tagging of Arabic text
#[derive(Debug, Parser)]
#[command(name = "arasas", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    Cli::parse().command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_annotate() {
        let cli = Cli::try_parse_from([
            "arasas",
            "annotate",
            "input.txt",
            "--output-format",
            "xml",
            "--log",
        ])
        .unwrap();

        match cli.command {
            Commands::Annotate(args) => {
                assert_eq!(args.input.to_str(), Some("input.txt"));
                assert!(args.log);
                assert!(!args.xml_full_tags);
            }
            other => panic!("expected annotate, got {other:?}"),
        }
    }
}

//! CLI command implementations

use crate::error::CliResult;
use arasas_core::OutputFormat;
use clap::Subcommand;

pub mod annotate;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tag a text file with semantic categories
    Annotate(annotate::AnnotateArgs),

    /// Check a lexicon or segmentation rules file
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Annotate(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::ALL {
                    println!("  {:<12} {}", format.as_str(), format_description(format));
                }
            }
        }
    }
}

fn format_description(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Vertical => "pos, form and tags per line, blank line between sentences",
        OutputFormat::Horizontal => "form_TAG tokens on one line",
        OutputFormat::Xml => "<w> element per token with sentence.token ids",
    }
}

//! CLI for reading the project metadata record
//!
//! Documentation and packaging scripts call this to read single fields or the
//! whole record as JSON.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use project_metadata::logging::init_structured_logging;
use project_metadata::{MetadataLoader, ProjectMetadata};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "project-metadata")]
#[command(about = "Read the project metadata record")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the record, or a single field of it
    Show(ShowArgs),
    /// Load the record and report whether it is valid
    Validate(SourceArgs),
    /// List the field names
    Fields,
}

#[derive(Args)]
struct SourceArgs {
    /// Metadata file (defaults to config/project.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct ShowArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Print only this field
    #[arg(short, long)]
    field: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

impl SourceArgs {
    fn loader(&self) -> MetadataLoader {
        match &self.config {
            Some(path) => MetadataLoader::new().with_config_file(path),
            None => MetadataLoader::new(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_structured_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show(args) => show(args)?,
        Commands::Validate(args) => validate(args),
        Commands::Fields => {
            for name in ProjectMetadata::field_names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn show(args: ShowArgs) -> anyhow::Result<()> {
    let metadata = args
        .source
        .loader()
        .load()
        .context("Failed to load project metadata")?;

    match args.field {
        Some(field) => {
            let Some(value) = metadata.get(&field) else {
                bail!("Unknown field '{field}'. Run `project-metadata fields` for the list");
            };
            if !value.is_absent() {
                println!("{value}");
            }
        }
        None => {
            let json = metadata.to_json()?;
            let rendered = if args.pretty {
                serde_json::to_string_pretty(&json)?
            } else {
                serde_json::to_string(&json)?
            };
            println!("{rendered}");
        }
    }

    Ok(())
}

fn validate(args: SourceArgs) {
    match args.loader().load() {
        Ok(metadata) => {
            println!("Metadata is valid");
            println!("   Project: {}", metadata.name());
            println!("   Website: {}", metadata.website());
            println!("   Copyright: {}", metadata.copyright_years());
        }
        Err(e) => {
            eprintln!("Metadata validation failed: {e}");
            std::process::exit(1);
        }
    }
}

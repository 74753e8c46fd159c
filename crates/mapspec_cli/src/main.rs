//! MAPSPEC CLI
//!
//! Resolves mapping specifications against a directory model repository.

#![warn(missing_docs)]
#![warn(clippy::all)]

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use mapspec_library::FunctionLibrary;
use mapspec_repository::DirectoryRepository;
use mapspec_resolve::{MappingSpecification, ReaderConfig, SpecificationReader};
use std::fmt::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mapspec")]
#[command(about = "MAPSPEC - resolve mapping specifications from a model repository", long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a mapping specification
    Resolve {
        #[command(flatten)]
        source: SourceArgs,
        /// Print the full specification as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the scripting functions of a mapping specification
    Functions {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct SourceArgs {
    /// Root directory of the model repository
    #[arg(short, long)]
    repo: PathBuf,
    /// Information model ID (namespace:name:version)
    #[arg(short, long)]
    model: Option<String>,
    /// Target platform key
    #[arg(short, long)]
    platform: Option<String>,
    /// JSON reader configuration; flags override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn load_config(source: &SourceArgs) -> Result<ReaderConfig> {
    let mut config = match &source.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("cannot read config {}", path.display()))?;
            ReaderConfig::from_json(&json)
                .wrap_err_with(|| format!("invalid config {}", path.display()))?
        }
        None => ReaderConfig::default(),
    };

    if let Some(model) = &source.model {
        config.model_id = model.clone();
    }
    if let Some(platform) = &source.platform {
        config.platform_key = Some(platform.clone());
    }
    if config.model_id.is_empty() {
        return Err(eyre!("no information model given; use --model or --config"));
    }
    Ok(config)
}

fn read(source: &SourceArgs) -> Result<MappingSpecification> {
    let config = load_config(source)?;
    tracing::debug!(repo = %source.repo.display(), "opening directory repository");
    let reader = SpecificationReader::new(DirectoryRepository::new(&source.repo), config);
    Ok(reader.read()?)
}

fn render_summary(spec: &MappingSpecification) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Information model: {}", spec.infomodel().id)?;
    writeln!(out, "Function blocks:")?;
    for (property, functionblock) in spec.functionblocks() {
        match functionblock {
            Some(fb) => writeln!(out, "  {} -> {}", property, fb.id)?,
            None => writeln!(out, "  {} -> (unresolved)", property)?,
        }
    }
    let library = spec.library();
    writeln!(
        out,
        "Functions: {} in {} namespace(s)",
        library.function_count(),
        library.len()
    )?;
    Ok(out)
}

fn render_functions(library: &FunctionLibrary) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for set in library.iter() {
        writeln!(out, "[{}]", set.namespace())?;
        for name in set.names() {
            writeln!(out, "  {}:{}", set.namespace(), name)?;
        }
    }
    Ok(out)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "mapspec=debug" } else { "mapspec=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve { source, json } => {
            let spec = read(&source)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&spec)?);
            } else {
                print!("{}", render_summary(&spec)?);
            }
            Ok(())
        }
        Commands::Functions { source } => {
            let spec = read(&source)?;
            print!("{}", render_functions(spec.library())?);
            Ok(())
        }
    }
}

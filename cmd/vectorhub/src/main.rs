//! vectorhub CLI - encode text with sentence-transformer models.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vectorhub_text::Dependencies;

mod commands;

use commands::{ConfigCommand, EncodeCommand, InfoCommand, ModelsCommand};

/// vectorhub CLI - encode text with sentence-transformer models.
///
/// Models are loaded from the model directory (default is
/// ~/.vectorhub/vectorhub/models/<model>/). Encoding requires a build with
/// the `fastembed` feature.
#[derive(Parser)]
#[command(name = "vectorhub")]
#[command(about = "Sentence-transformer text encoder CLI tool")]
#[command(version)]
pub struct Cli {
    /// Config file (default is ~/.vectorhub/vectorhub/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage CLI configuration
    Config(ConfigCommand),
    /// Encode text into vectors
    Encode(EncodeCommand),
    /// Show the encoder family definition
    Info(InfoCommand),
    /// List known models and their vector lengths
    Models(ModelsCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let deps = Dependencies::detect();

    match &cli.command {
        Commands::Config(cmd) => cmd.run(&cli),
        Commands::Encode(cmd) => cmd.run(&cli, deps),
        Commands::Info(cmd) => cmd.run(&cli),
        Commands::Models(cmd) => cmd.run(&cli),
    }
}

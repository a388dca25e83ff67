//! Utility functions for CLI commands.

use vectorhub_cli::{Config, Output, OutputFormat, load_config};
#[cfg(feature = "fastembed")]
use vectorhub_text::FastEmbedLoader;
use vectorhub_text::ModelLoader;

use crate::Cli;

const APP_NAME: &str = "vectorhub";

/// Gets the global configuration.
pub fn get_config(cli: &Cli) -> anyhow::Result<Config> {
    load_config(APP_NAME, cli.config.as_deref())
}

/// Builds the output writer from the global flags.
pub fn output(cli: &Cli) -> Output {
    Output::new(OutputFormat::from_json_flag(cli.json), cli.output.clone())
}

/// Returns the model loader compiled into this build.
#[cfg(feature = "fastembed")]
pub fn model_loader(cfg: &Config) -> Box<dyn ModelLoader> {
    Box::new(FastEmbedLoader::new(cfg.resolve_model_dir()))
}

/// Returns the model loader compiled into this build.
#[cfg(not(feature = "fastembed"))]
pub fn model_loader(_cfg: &Config) -> Box<dyn ModelLoader> {
    Box::new(vectorhub_text::NotInstalled)
}

/// Prints a success message.
pub fn print_success(msg: &str) {
    eprintln!("✓ {}", msg);
}

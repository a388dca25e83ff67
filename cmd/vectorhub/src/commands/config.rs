//! Configuration management commands.

use clap::{Args, Subcommand};

use vectorhub_text::registry;

use super::{get_config, print_success};
use crate::Cli;

/// Manage CLI configuration.
///
/// Configuration is stored in ~/.vectorhub/vectorhub/config.yaml
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Set the default model
    #[command(name = "set-model")]
    SetModel {
        /// Model identifier (see 'vectorhub models')
        name: String,
    },
    /// Set the directory models are loaded from
    #[command(name = "set-model-dir")]
    SetModelDir {
        /// Directory holding one subdirectory per model
        dir: String,
    },
    /// View the current configuration
    View,
}

impl ConfigCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            ConfigSubcommand::SetModel { name } => {
                if !registry::builtin().contains(name) {
                    anyhow::bail!("unknown model '{}', see 'vectorhub models'", name);
                }
                let mut cfg = get_config(cli)?;
                cfg.set_default_model(name)?;
                print_success(&format!("Default model set to \"{}\"", name));
                Ok(())
            }

            ConfigSubcommand::SetModelDir { dir } => {
                let mut cfg = get_config(cli)?;
                cfg.set_model_dir(dir)?;
                print_success(&format!("Model directory set to \"{}\"", dir));
                Ok(())
            }

            ConfigSubcommand::View => {
                let cfg = get_config(cli)?;

                println!("Config file: {}", cfg.path().display());
                if cfg.default_model.is_empty() {
                    println!("Default model: (none)");
                } else {
                    println!("Default model: {}", cfg.default_model);
                }
                println!("Model directory: {}", cfg.resolve_model_dir().display());
                Ok(())
            }
        }
    }
}

use clap::Args;

use vectorhub_text::SENTENCE_TRANSFORMERS;

use super::output;
use crate::Cli;

/// Show the sentence-transformer model definition.
#[derive(Args)]
pub struct InfoCommand {}

impl InfoCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        output(cli).write(&SENTENCE_TRANSFORMERS)
    }
}

use clap::Args;
use serde::Serialize;

use vectorhub_text::registry;

use super::output;
use crate::Cli;

/// List known models and their vector lengths.
#[derive(Args)]
pub struct ModelsCommand {}

#[derive(Serialize)]
struct ModelEntry<'a> {
    id: &'a str,
    vector_length: usize,
}

impl ModelsCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let models = registry::builtin();

        if cli.json || cli.output.is_some() {
            let entries: Vec<ModelEntry<'_>> = models
                .iter()
                .map(|(id, meta)| ModelEntry {
                    id,
                    vector_length: meta.vector_length,
                })
                .collect();
            return output(cli).write(&entries);
        }

        println!("{:<50} {}", "MODEL", "VECTOR_LENGTH");
        for (id, meta) in models.iter() {
            println!("{:<50} {}", id, meta.vector_length);
        }
        Ok(())
    }
}

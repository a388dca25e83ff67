//! Encode command.

use clap::Args;
use serde::Serialize;
use tracing::debug;

use vectorhub_text::{Dependencies, SentenceEncoder};

use super::{get_config, model_loader, output};
use crate::Cli;

/// Encode text into vectors.
///
/// Texts come from the arguments, or one per line from --file. Texts read
/// from a file, or more than one text argument, are encoded as a single batch.
#[derive(Args)]
pub struct EncodeCommand {
    /// Model identifier (default: the configured default model)
    #[arg(short = 'm', long)]
    model: Option<String>,

    /// Read texts from a file, one per line
    #[arg(short = 'f', long = "file")]
    file: Option<String>,

    /// Texts to encode
    texts: Vec<String>,
}

#[derive(Serialize)]
struct EncodeResult<'a> {
    model: &'a str,
    vector_length: usize,
    embeddings: Vec<Embedding<'a>>,
}

#[derive(Serialize)]
struct Embedding<'a> {
    text: &'a str,
    vector: Vec<f32>,
}

impl EncodeCommand {
    pub fn run(&self, cli: &Cli, deps: Dependencies) -> anyhow::Result<()> {
        let cfg = get_config(cli)?;
        let model = cfg.resolve_model(self.model.as_deref()).ok_or_else(|| {
            anyhow::anyhow!(
                "no model specified. Use -m flag or set a default with 'vectorhub config set-model'"
            )
        })?;

        let texts = self.collect_texts()?;
        if texts.is_empty() {
            anyhow::bail!("nothing to encode, pass texts as arguments or use -f flag");
        }

        let loader = model_loader(&cfg);
        let encoder = SentenceEncoder::new(model, loader.as_ref(), deps)?;
        debug!(model, count = texts.len(), "encoding");

        let vectors = match texts.as_slice() {
            [text] if !self.batched(1) => vec![encoder.encode(text)?],
            _ => encoder.bulk_encode(&texts)?,
        };

        let result = EncodeResult {
            model: encoder.model_name(),
            vector_length: encoder.vector_length(),
            embeddings: texts
                .iter()
                .zip(vectors)
                .map(|(text, vector)| Embedding { text, vector })
                .collect(),
        };
        output(cli).write(&result)
    }

    /// Returns true if `count` texts go through `bulk_encode`.
    fn batched(&self, count: usize) -> bool {
        self.file.is_some() || count > 1
    }

    fn collect_texts(&self) -> anyhow::Result<Vec<String>> {
        let mut texts = self.texts.clone();
        if let Some(path) = &self.file {
            let content = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("read {}: {}", path, e))?;
            texts.extend(content.lines().map(str::to_string));
        }
        Ok(texts)
    }
}

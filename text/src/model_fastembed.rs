//! [`ModelLoader`] backed by fastembed (ONNX Runtime).
//!
//! Each model lives in its own directory under the loader root, named after
//! the model identifier and holding an ONNX export of the
//! sentence-transformer:
//!
//! ```text
//! <root>/distilbert-base-nli-stsb-mean-tokens/
//!     model.onnx
//!     tokenizer.json
//!     config.json
//!     special_tokens_map.json
//!     tokenizer_config.json
//! ```
//!
//! Only models that are a bare transformer followed by pooling can be served.
//! `distiluse-base-multilingual-cased-v2` adds a dense projection after
//! pooling and the `average_word_embeddings_*` models have no transformer at
//! all; [`FastEmbedLoader::load`] rejects them with
//! [`BackendError::Unsupported`].
//!
//! fastembed L2-normalizes every output vector and offers no way to turn
//! that off. Vectors from this backend therefore have unit length, unlike
//! the raw pooled output of the Python `sentence-transformers` package.
//! Cosine similarity is unaffected; dot products and norms are not.

use std::path::{Path, PathBuf};

use fastembed::{
    InitOptionsUserDefined, Pooling, TextEmbedding, TokenizerFiles, UserDefinedEmbeddingModel,
};
use tracing::debug;

use crate::error::{BackendError, BoxError};
use crate::model::{ModelLoader, SentenceModel};
use crate::registry::ModelId;

const ONNX_FILE: &str = "model.onnx";
const TOKENIZER_FILE: &str = "tokenizer.json";
const CONFIG_FILE: &str = "config.json";
const SPECIAL_TOKENS_MAP_FILE: &str = "special_tokens_map.json";
const TOKENIZER_CONFIG_FILE: &str = "tokenizer_config.json";

/// Loads sentence-transformer ONNX exports from a local directory.
///
/// Returned vectors are L2-normalized: fastembed normalizes every output row
/// and has no option to return the raw pooled vector.
#[derive(Debug, Clone)]
pub struct FastEmbedLoader {
    root: PathBuf,
    max_length: usize,
}

impl FastEmbedLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_length: InitOptionsUserDefined::default().max_length,
        }
    }

    /// Sets the maximum token length; longer inputs are truncated.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Returns the directory a model is loaded from.
    pub fn model_dir(&self, identifier: &str) -> PathBuf {
        self.root.join(identifier)
    }

    /// Returns true if this backend can run `identifier`.
    pub fn supports(identifier: &str) -> bool {
        pooling_for(identifier).is_some()
    }
}

fn read(dir: &Path, name: &str) -> Result<Vec<u8>, BoxError> {
    let path = dir.join(name);
    std::fs::read(&path).map_err(|e| format!("read {}: {e}", path.display()).into())
}

/// Pooling over the transformer output, or `None` when the model needs
/// layers fastembed does not run.
///
/// LaBSE is trained with CLS pooling; the rest of the family uses mean pooling.
fn pooling_for(identifier: &str) -> Option<Pooling> {
    match identifier {
        ModelId::LABSE => Some(Pooling::Cls),
        // Dense 768 -> 512 after pooling.
        ModelId::DISTILUSE_BASE_MULTILINGUAL_CASED_V2 => None,
        ModelId::AVERAGE_WORD_EMBEDDINGS_GLOVE_6B_300D
        | ModelId::AVERAGE_WORD_EMBEDDINGS_KOMNINOS
        | ModelId::AVERAGE_WORD_EMBEDDINGS_LEVY_DEPENDENCY
        | ModelId::AVERAGE_WORD_EMBEDDINGS_GLOVE_840B_300D => None,
        _ => Some(Pooling::Mean),
    }
}

impl ModelLoader for FastEmbedLoader {
    fn load(&self, identifier: &str) -> Result<Box<dyn SentenceModel>, BoxError> {
        let pooling = pooling_for(identifier)
            .ok_or_else(|| BackendError::Unsupported(identifier.to_string()))?;
        let dir = self.model_dir(identifier);
        debug!(dir = %dir.display(), "loading fastembed model");

        let tokenizer_files = TokenizerFiles {
            tokenizer_file: read(&dir, TOKENIZER_FILE)?,
            config_file: read(&dir, CONFIG_FILE)?,
            special_tokens_map_file: read(&dir, SPECIAL_TOKENS_MAP_FILE)?,
            tokenizer_config_file: read(&dir, TOKENIZER_CONFIG_FILE)?,
        };
        let model = UserDefinedEmbeddingModel::new(read(&dir, ONNX_FILE)?, tokenizer_files)
            .with_pooling(pooling);
        let opts = InitOptionsUserDefined {
            max_length: self.max_length,
            ..Default::default()
        };

        let embedding = TextEmbedding::try_new_from_user_defined(model, opts)?;
        Ok(Box::new(FastEmbedModel { embedding }))
    }
}

struct FastEmbedModel {
    embedding: TextEmbedding,
}

impl SentenceModel for FastEmbedModel {
    fn compute(&self, batch: &[&str]) -> Result<Vec<Vec<f32>>, BoxError> {
        // fastembed preserves input order across its internal batches.
        Ok(self.embedding.embed(batch.to_vec(), None)?)
    }
}

//! Model registry: known sentence-transformer models and their vector lengths.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Identifies a built-in sentence-transformer model.
pub struct ModelId;

impl ModelId {
    /// Paraphrase model distilled from RoBERTa-base.
    pub const DISTILROBERTA_BASE_PARAPHRASE_V1: &str = "distilroberta-base-paraphrase-v1";
    /// Multilingual paraphrase model (XLM-R student of distilroberta).
    pub const XLM_R_DISTILROBERTA_BASE_PARAPHRASE_V1: &str =
        "xlm-r-distilroberta-base-paraphrase-v1";

    /// NLI + STSb trained models, mean pooling.
    pub const DISTILBERT_BASE_NLI_STSB_MEAN_TOKENS: &str = "distilbert-base-nli-stsb-mean-tokens";
    pub const BERT_LARGE_NLI_STSB_MEAN_TOKENS: &str = "bert-large-nli-stsb-mean-tokens";
    pub const ROBERTA_BASE_NLI_STSB_MEAN_TOKENS: &str = "roberta-base-nli-stsb-mean-tokens";
    pub const ROBERTA_LARGE_NLI_STSB_MEAN_TOKENS: &str = "roberta-large-nli-stsb-mean-tokens";

    /// Duplicate-question ranking models trained on Quora.
    pub const DISTILBERT_BASE_NLI_STSB_QUORA_RANKING: &str =
        "distilbert-base-nli-stsb-quora-ranking";
    pub const DISTILBERT_MULTILINGUAL_NLI_STSB_QUORA_RANKING: &str =
        "distilbert-multilingual-nli-stsb-quora-ranking";

    /// Passage retrieval model trained on MS MARCO.
    pub const DISTILROBERTA_BASE_MSMARCO_V1: &str = "distilroberta-base-msmarco-v1";

    pub const DISTILUSE_BASE_MULTILINGUAL_CASED_V2: &str = "distiluse-base-multilingual-cased-v2";
    pub const XLM_R_BERT_BASE_NLI_STSB_MEAN_TOKENS: &str = "xlm-r-bert-base-nli-stsb-mean-tokens";

    pub const BERT_BASE_WIKIPEDIA_SECTIONS_MEAN_TOKENS: &str =
        "bert-base-wikipedia-sections-mean-tokens";

    /// Language-agnostic BERT sentence embedding. Uses the CLS token.
    pub const LABSE: &str = "LaBSE";

    /// Averaged word embeddings, no transformer.
    pub const AVERAGE_WORD_EMBEDDINGS_GLOVE_6B_300D: &str = "average_word_embeddings_glove.6B.300d";
    pub const AVERAGE_WORD_EMBEDDINGS_KOMNINOS: &str = "average_word_embeddings_komninos";
    pub const AVERAGE_WORD_EMBEDDINGS_LEVY_DEPENDENCY: &str =
        "average_word_embeddings_levy_dependency";
    pub const AVERAGE_WORD_EMBEDDINGS_GLOVE_840B_300D: &str =
        "average_word_embeddings_glove.840B.300d";
}

/// Static metadata for a registered model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelMetadata {
    /// Output dimensionality. Always positive.
    pub vector_length: usize,
}

/// Immutable mapping from model identifier to [`ModelMetadata`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    models: BTreeMap<String, ModelMetadata>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model. Registering the same ID twice replaces the previous entry.
    pub fn with_model(mut self, id: &str, vector_length: NonZeroUsize) -> Self {
        let meta = ModelMetadata {
            vector_length: vector_length.get(),
        };
        self.models.insert(id.to_string(), meta);
        self
    }

    /// Returns the metadata for `id`, if registered.
    pub fn lookup(&self, id: &str) -> Option<ModelMetadata> {
        self.models.get(id).copied()
    }

    /// Returns true if the model is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.models.contains_key(id)
    }

    /// Returns the registered IDs in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        self.models.keys().map(|s| s.as_str()).collect()
    }

    /// Iterates over `(id, metadata)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ModelMetadata)> + '_ {
        self.models.iter().map(|(id, meta)| (id.as_str(), *meta))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

const fn dim(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => panic!("vector length must be positive"),
    }
}

const BUILTIN: [(&str, NonZeroUsize); 17] = [
    (ModelId::DISTILROBERTA_BASE_PARAPHRASE_V1, dim(768)),
    (ModelId::XLM_R_DISTILROBERTA_BASE_PARAPHRASE_V1, dim(768)),
    (ModelId::DISTILBERT_BASE_NLI_STSB_MEAN_TOKENS, dim(768)),
    (ModelId::BERT_LARGE_NLI_STSB_MEAN_TOKENS, dim(1024)),
    (ModelId::ROBERTA_BASE_NLI_STSB_MEAN_TOKENS, dim(768)),
    (ModelId::ROBERTA_LARGE_NLI_STSB_MEAN_TOKENS, dim(1024)),
    (ModelId::DISTILBERT_BASE_NLI_STSB_QUORA_RANKING, dim(768)),
    (ModelId::DISTILBERT_MULTILINGUAL_NLI_STSB_QUORA_RANKING, dim(768)),
    (ModelId::DISTILROBERTA_BASE_MSMARCO_V1, dim(768)),
    (ModelId::DISTILUSE_BASE_MULTILINGUAL_CASED_V2, dim(512)),
    (ModelId::XLM_R_BERT_BASE_NLI_STSB_MEAN_TOKENS, dim(768)),
    (ModelId::BERT_BASE_WIKIPEDIA_SECTIONS_MEAN_TOKENS, dim(768)),
    (ModelId::LABSE, dim(768)),
    (ModelId::AVERAGE_WORD_EMBEDDINGS_GLOVE_6B_300D, dim(300)),
    (ModelId::AVERAGE_WORD_EMBEDDINGS_KOMNINOS, dim(300)),
    (ModelId::AVERAGE_WORD_EMBEDDINGS_LEVY_DEPENDENCY, dim(768)),
    (ModelId::AVERAGE_WORD_EMBEDDINGS_GLOVE_840B_300D, dim(300)),
];

static SENTENCE_TRANSFORMERS: Lazy<Registry> = Lazy::new(|| {
    BUILTIN
        .iter()
        .fold(Registry::new(), |reg, &(id, len)| reg.with_model(id, len))
});

/// Returns the built-in sentence-transformer registry.
pub fn builtin() -> &'static Registry {
    &SENTENCE_TRANSFORMERS
}

/// Looks up a model in the built-in registry.
pub fn lookup(id: &str) -> Option<ModelMetadata> {
    builtin().lookup(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_all_models() {
        assert_eq!(builtin().len(), 17);
        assert_eq!(
            lookup(ModelId::DISTILBERT_BASE_NLI_STSB_MEAN_TOKENS),
            Some(ModelMetadata { vector_length: 768 })
        );
        let len = |id| lookup(id).map(|meta| meta.vector_length);
        assert_eq!(len(ModelId::BERT_LARGE_NLI_STSB_MEAN_TOKENS), Some(1024));
        assert_eq!(len(ModelId::DISTILUSE_BASE_MULTILINGUAL_CASED_V2), Some(512));
        assert_eq!(len(ModelId::AVERAGE_WORD_EMBEDDINGS_KOMNINOS), Some(300));
        assert!(builtin().iter().all(|(_, meta)| meta.vector_length > 0));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(builtin().contains("LaBSE"));
        assert!(!builtin().contains("labse"));
        assert_eq!(lookup("bert-base-uncased"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn ids_are_sorted() {
        let ids = builtin().ids();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn custom_registry_replaces_entries() {
        let reg = Registry::new()
            .with_model("demo-model", dim(4))
            .with_model("demo-model", dim(8));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.lookup("demo-model").unwrap().vector_length, 8);
        assert!(Registry::new().is_empty());
    }

    #[test]
    fn builtin_table_has_unique_ids() {
        let mut ids: Vec<&str> = BUILTIN.iter().map(|&(id, _)| id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), BUILTIN.len());
    }
}

//! Descriptive metadata for the sentence-transformer encoder family.

use chrono::NaiveDate;
use serde::Serialize;

/// Describes an encoder family: where it comes from and how to install it.
#[derive(Debug, Clone, Serialize)]
pub struct ModelDefinition {
    pub model_id: &'static str,
    pub model_name: &'static str,
    /// Free-form, since the length depends on the selected model.
    pub vector_length: &'static str,
    pub description: &'static str,
    pub paper: &'static str,
    pub repo: &'static str,
    pub release_date: NaiveDate,
    pub installation: &'static str,
    pub example: &'static str,
}

const RELEASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2019, 8, 27) {
    Some(d) => d,
    None => panic!("invalid release date"),
};

/// Definition of the sentence-transformer models from sbert.net.
pub static SENTENCE_TRANSFORMERS: ModelDefinition = ModelDefinition {
    model_id: "text/sentence-transformers",
    model_name: "Sentence Transformer Models",
    vector_length: "Depends on model.",
    description: "These are Sentence Transformer models from sbert.net by UKPLab.",
    paper: "https://arxiv.org/abs/1908.10084",
    repo: "https://github.com/UKPLab/sentence-transformers",
    release_date: RELEASE_DATE,
    installation: "cargo install vectorhub-cmd --features fastembed",
    example: "vectorhub encode -m distilbert-base-nli-stsb-mean-tokens \"I enjoy taking long walks along the beach with my dog.\"",
};

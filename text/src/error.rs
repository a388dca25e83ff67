use thiserror::Error;

/// Boxed failure raised by a model collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`SentenceEncoder`](crate::SentenceEncoder).
#[derive(Debug, Error)]
pub enum EncoderError {
    /// The requested model identifier is not in the registry.
    #[error("text encoder: unknown model identifier {0:?}")]
    Configuration(String),

    /// The backend could not produce a model handle.
    #[error("text encoder: model {identifier:?} unavailable: {source}")]
    Dependency {
        identifier: String,
        #[source]
        source: BoxError,
    },

    /// The model failed while computing embeddings.
    #[error("text encoder: vector encoding failed: {0}")]
    VectorEncoding(#[source] BoxError),
}

/// Collaborator contract violations detected by the encoder itself.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("no sentence-transformer backend installed")]
    NotInstalled,

    #[error("model {0:?} is not supported by this backend")]
    Unsupported(String),

    #[error("embedding count mismatch: expected {expected}, got {got}")]
    CountMismatch { expected: usize, got: usize },

    #[error("dimension mismatch at index {index}: expected {expected}, got {got}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },
}

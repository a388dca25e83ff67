use crate::error::BoxError;

/// A loaded sentence-embedding model.
///
/// # Ordering Contract
///
/// `compute` must return exactly one embedding per input text, in input
/// order: `output[i]` is the embedding of `batch[i]`. The encoder checks the
/// count and the length of every embedding and reports violations as
/// encoding failures.
///
/// # Thread Safety
///
/// Implementations must be safe for concurrent use.
pub trait SentenceModel: Send + Sync {
    /// Embeds every text of `batch` in a single call.
    fn compute(&self, batch: &[&str]) -> Result<Vec<Vec<f32>>, BoxError>;
}

/// Produces [`SentenceModel`] handles by model identifier.
///
/// Loading may download or read model weights; that I/O belongs to the
/// implementation.
pub trait ModelLoader {
    fn load(&self, identifier: &str) -> Result<Box<dyn SentenceModel>, BoxError>;
}

impl<L: ModelLoader + ?Sized> ModelLoader for &L {
    fn load(&self, identifier: &str) -> Result<Box<dyn SentenceModel>, BoxError> {
        (**self).load(identifier)
    }
}

impl<L: ModelLoader + ?Sized> ModelLoader for Box<L> {
    fn load(&self, identifier: &str) -> Result<Box<dyn SentenceModel>, BoxError> {
        (**self).load(identifier)
    }
}

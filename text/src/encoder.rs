//! [`SentenceEncoder`]: validated model identifier -> live embedding model.

use std::fmt;

use tracing::{debug, info, warn};

use crate::definition::{ModelDefinition, SENTENCE_TRANSFORMERS};
use crate::deps::Dependencies;
use crate::error::{BackendError, BoxError, EncoderError};
use crate::model::{ModelLoader, SentenceModel};
use crate::registry::{self, Registry};

/// Encodes text into dense vectors with a sentence-transformer model.
///
/// The identifier is checked against a [`Registry`] before anything is
/// loaded, so an unknown model never reaches the backend.
///
/// ```no_run
/// use vectorhub_text::{Dependencies, ModelId, NotInstalled, SentenceEncoder};
///
/// let enc = SentenceEncoder::new(
///     ModelId::DISTILBERT_BASE_NLI_STSB_MEAN_TOKENS,
///     &NotInstalled,
///     Dependencies::detect(),
/// )?;
/// let v = enc.encode("I enjoy taking long walks along the beach with my dog.")?;
/// assert_eq!(v.len(), enc.vector_length());
/// # Ok::<(), vectorhub_text::EncoderError>(())
/// ```
pub struct SentenceEncoder {
    model: Box<dyn SentenceModel>,
    model_name: String,
    vector_length: usize,
    models: Registry,
}

impl SentenceEncoder {
    /// Creates an encoder for a model in the built-in registry.
    pub fn new<L: ModelLoader + ?Sized>(
        model_name: &str,
        loader: &L,
        deps: Dependencies,
    ) -> Result<Self, EncoderError> {
        Self::with_registry(registry::builtin(), model_name, loader, deps)
    }

    /// Creates an encoder for a model in `registry`.
    pub fn with_registry<L: ModelLoader + ?Sized>(
        registry: &Registry,
        model_name: &str,
        loader: &L,
        deps: Dependencies,
    ) -> Result<Self, EncoderError> {
        let meta = registry
            .lookup(model_name)
            .ok_or_else(|| EncoderError::Configuration(model_name.to_string()))?;

        if !deps.sentence_transformers() {
            return Err(EncoderError::Dependency {
                identifier: model_name.to_string(),
                source: Box::new(BackendError::NotInstalled),
            });
        }

        let model = loader.load(model_name).map_err(|e| {
            warn!(model = model_name, error = %e, "model load failed");
            EncoderError::Dependency {
                identifier: model_name.to_string(),
                source: e,
            }
        })?;
        info!(
            model = model_name,
            vector_length = meta.vector_length,
            "model loaded"
        );

        Ok(Self {
            model,
            model_name: model_name.to_string(),
            vector_length: meta.vector_length,
            models: registry.clone(),
        })
    }

    /// Returns the embedding for a single text. Empty text is forwarded as-is.
    pub fn encode(&self, text: &str) -> Result<Vec<f32>, EncoderError> {
        let mut vecs = self.compute(&[text])?;
        // compute() already verified there is exactly one.
        vecs.pop().ok_or_else(|| {
            EncoderError::VectorEncoding(Box::new(BackendError::CountMismatch {
                expected: 1,
                got: 0,
            }))
        })
    }

    /// Returns one embedding per text, in input order.
    ///
    /// The whole batch goes to the model in one call. A failure anywhere
    /// fails the call.
    pub fn bulk_encode<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<Vec<f32>>, EncoderError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let batch: Vec<&str> = texts.iter().map(AsRef::as_ref).collect();
        self.compute(&batch)
    }

    /// Returns the dimensionality of the output vectors.
    pub fn vector_length(&self) -> usize {
        self.vector_length
    }

    /// Returns the model identifier this encoder was built for.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Returns the registry the identifier was validated against.
    pub fn models(&self) -> &Registry {
        &self.models
    }

    /// Returns the encoder family definition.
    pub fn definition(&self) -> &'static ModelDefinition {
        &SENTENCE_TRANSFORMERS
    }

    fn compute(&self, batch: &[&str]) -> Result<Vec<Vec<f32>>, EncoderError> {
        debug!(model = %self.model_name, batch_size = batch.len(), "encode");
        self.model
            .compute(batch)
            .and_then(|vecs| self.check(batch.len(), vecs))
            .map_err(|e| {
                warn!(model = %self.model_name, error = %e, "encode failed");
                EncoderError::VectorEncoding(e)
            })
    }

    fn check(&self, expected: usize, vecs: Vec<Vec<f32>>) -> Result<Vec<Vec<f32>>, BoxError> {
        if vecs.len() != expected {
            return Err(Box::new(BackendError::CountMismatch {
                expected,
                got: vecs.len(),
            }));
        }
        if let Some((index, v)) = vecs
            .iter()
            .enumerate()
            .find(|(_, v)| v.len() != self.vector_length)
        {
            return Err(Box::new(BackendError::DimensionMismatch {
                index,
                expected: self.vector_length,
                got: v.len(),
            }));
        }
        Ok(vecs)
    }
}

impl fmt::Debug for SentenceEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentenceEncoder")
            .field("model_name", &self.model_name)
            .field("vector_length", &self.vector_length)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns `[len, 0, 0, ...]` for each text, sized by the caller.
    struct LenModel {
        dim: usize,
    }

    impl SentenceModel for LenModel {
        fn compute(&self, batch: &[&str]) -> Result<Vec<Vec<f32>>, BoxError> {
            Ok(batch
                .iter()
                .map(|t| {
                    let mut v = vec![0.0; self.dim];
                    v[0] = t.len() as f32;
                    v
                })
                .collect())
        }
    }

    struct LenLoader {
        dim: usize,
        calls: AtomicUsize,
    }

    impl LenLoader {
        fn new(dim: usize) -> Self {
            Self {
                dim,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ModelLoader for LenLoader {
        fn load(&self, _identifier: &str) -> Result<Box<dyn SentenceModel>, BoxError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(LenModel { dim: self.dim }))
        }
    }

    fn demo_registry() -> Registry {
        Registry::new().with_model("demo-model", NonZeroUsize::new(4).unwrap())
    }

    #[test]
    fn new_uses_builtin_registry() {
        let loader = LenLoader::new(512);
        let enc = SentenceEncoder::new(
            "distiluse-base-multilingual-cased-v2",
            &loader,
            Dependencies::installed(),
        )
        .unwrap();
        assert_eq!(enc.vector_length(), 512);
        assert_eq!(enc.model_name(), "distiluse-base-multilingual-cased-v2");
        assert_eq!(enc.models().len(), registry::builtin().len());
        assert_eq!(enc.definition().model_id, "text/sentence-transformers");
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_dependency_skips_loader() {
        let loader = LenLoader::new(768);
        let err = SentenceEncoder::new("LaBSE", &loader, Dependencies::missing()).unwrap_err();
        match err {
            EncoderError::Dependency { identifier, .. } => assert_eq!(identifier, "LaBSE"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(loader.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unknown_model_checked_before_dependencies() {
        let loader = LenLoader::new(768);
        let err = SentenceEncoder::new("bert-base-uncased", &loader, Dependencies::missing())
            .unwrap_err();
        assert!(matches!(err, EncoderError::Configuration(ref id) if id == "bert-base-uncased"));
    }

    #[test]
    fn wrong_dimension_is_encoding_error() {
        let loader = LenLoader::new(3);
        let reg = demo_registry();
        let enc =
            SentenceEncoder::with_registry(&reg, "demo-model", &loader, Dependencies::installed())
                .unwrap();
        let err = enc.encode("hello").unwrap_err();
        let EncoderError::VectorEncoding(source) = err else {
            panic!("expected VectorEncoding");
        };
        assert!(matches!(
            source.downcast_ref::<BackendError>(),
            Some(BackendError::DimensionMismatch {
                index: 0,
                expected: 4,
                got: 3
            })
        ));
    }

    #[test]
    fn bulk_encode_accepts_owned_strings() {
        let loader = LenLoader::new(4);
        let reg = demo_registry();
        let enc =
            SentenceEncoder::with_registry(&reg, "demo-model", &loader, Dependencies::installed())
                .unwrap();
        let texts = vec!["a".to_string(), "abc".to_string()];
        let vecs = enc.bulk_encode(&texts).unwrap();
        assert_eq!(vecs[0][0], 1.0);
        assert_eq!(vecs[1][0], 3.0);
    }

    #[test]
    fn debug_omits_model_handle() {
        let loader = LenLoader::new(4);
        let reg = demo_registry();
        let enc =
            SentenceEncoder::with_registry(&reg, "demo-model", &loader, Dependencies::installed())
                .unwrap();
        let s = format!("{enc:?}");
        assert!(s.contains("demo-model"));
        assert!(s.contains("vector_length: 4"));
    }
}

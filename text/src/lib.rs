//! Sentence-transformer text encoders behind a uniform text-to-vector interface.
//!
//! # Architecture
//!
//! 1. [`Registry`]: model identifier -> [`ModelMetadata`] (vector length)
//! 2. [`ModelLoader::load`]: identifier -> [`SentenceModel`] handle
//! 3. [`SentenceEncoder`]: validates the identifier, owns the handle and
//!    exposes [`encode`](SentenceEncoder::encode) and
//!    [`bulk_encode`](SentenceEncoder::bulk_encode)
//!
//! The model itself (tokenization, inference, weights) is a collaborator.
//! Enable the `fastembed` feature for an ONNX Runtime backed loader, or
//! implement [`ModelLoader`] yourself.
//!
//! # Errors
//!
//! Construction fails with [`EncoderError::Configuration`] for unknown
//! identifiers and [`EncoderError::Dependency`] when no model can be loaded.
//! Encode calls fail with [`EncoderError::VectorEncoding`] only.

mod definition;
mod deps;
mod encoder;
mod error;
mod model;
#[cfg(feature = "fastembed")]
mod model_fastembed;
pub mod registry;

pub use definition::{ModelDefinition, SENTENCE_TRANSFORMERS};
pub use deps::{Dependencies, NotInstalled};
pub use encoder::SentenceEncoder;
pub use error::{BackendError, BoxError, EncoderError};
pub use model::{ModelLoader, SentenceModel};
#[cfg(feature = "fastembed")]
pub use model_fastembed::FastEmbedLoader;
pub use registry::{ModelId, ModelMetadata, Registry};

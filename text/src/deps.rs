//! Backend capability check, performed once at process start.

use crate::error::{BackendError, BoxError};
use crate::model::{ModelLoader, SentenceModel};

/// Records which model backends are available to this process.
///
/// Call [`Dependencies::detect`] once during start-up and pass the value
/// into [`SentenceEncoder::new`](crate::SentenceEncoder::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependencies {
    sentence_transformers: bool,
}

impl Dependencies {
    /// Detects the backends compiled into this build.
    pub fn detect() -> Self {
        let deps = Self {
            sentence_transformers: cfg!(feature = "fastembed"),
        };
        tracing::debug!(
            sentence_transformers = deps.sentence_transformers,
            "backend capabilities"
        );
        deps
    }

    /// A sentence-transformer backend is available.
    pub fn installed() -> Self {
        Self {
            sentence_transformers: true,
        }
    }

    /// No sentence-transformer backend is available.
    pub fn missing() -> Self {
        Self {
            sentence_transformers: false,
        }
    }

    pub fn sentence_transformers(&self) -> bool {
        self.sentence_transformers
    }
}

/// Loader used when no backend is compiled in. Every load fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotInstalled;

impl ModelLoader for NotInstalled {
    fn load(&self, _identifier: &str) -> Result<Box<dyn SentenceModel>, BoxError> {
        Err(Box::new(BackendError::NotInstalled))
    }
}

//! Error types for partial loading.
//!
//! Both variants wrap the underlying capability error and carry the partial
//! name for context. Failures are never cached: a later
//! [`load`](crate::PartialCache::load) for the same name re-attempts the
//! full read/parse path, so a transient source failure heals on the next
//! access.

use thiserror::Error;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Failure modes of [`PartialCache::load`](crate::PartialCache::load).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The template source could not resolve the partial name.
    #[error("template source could not resolve partial '{name}'")]
    SourceNotFound {
        /// Name of the partial that was requested.
        name: String,
        /// Underlying source error.
        #[source]
        source: BoxedError,
    },

    /// The parser rejected the retrieved partial text.
    #[error("partial '{name}' failed to parse")]
    ParseFailure {
        /// Name of the partial that was requested.
        name: String,
        /// Underlying parser error.
        #[source]
        source: BoxedError,
    },
}

impl LoadError {
    /// The partial name the failed load was for.
    #[must_use]
    pub fn partial_name(&self) -> &str {
        match self {
            Self::SourceNotFound {
                name, ..
            }
            | Self::ParseFailure {
                name, ..
            } => name,
        }
    }

    pub(crate) fn source_not_found(name: &str, err: anyhow::Error) -> Self {
        Self::SourceNotFound {
            name: name.to_string(),
            source: err.into(),
        }
    }

    pub(crate) fn parse_failure(name: &str, err: anyhow::Error) -> Self {
        Self::ParseFailure {
            name: name.to_string(),
            source: err.into(),
        }
    }
}

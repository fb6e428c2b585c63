//! Parser capability and parse-time options.
//!
//! A [`TemplateParser`] turns raw partial text into an executable
//! [`Template`]. Parsing behavior can be tuned per render pass through
//! [`ParseOptions`], an opaque bag of JSON values the cache passes through
//! without interpreting.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

/// An executable template produced by a [`TemplateParser`].
///
/// The cache treats templates as opaque handles; rendering them is the
/// surrounding engine's job. Cached templates are shared behind [`Arc`], so
/// implementations must be safe to render from multiple threads.
pub trait Template: Send + Sync + std::fmt::Debug {
    /// Render the template to its output text.
    fn render(&self) -> Result<String>;
}

/// Compiles raw template text into an executable [`Template`].
pub trait TemplateParser: Send + Sync {
    /// Parse `text` under the given parse-time `options`.
    ///
    /// # Errors
    ///
    /// Fails when the text is not a well-formed template. The cache surfaces
    /// that failure as [`LoadError::ParseFailure`](crate::LoadError::ParseFailure)
    /// without caching it.
    fn parse(&self, text: &str, options: &ParseOptions) -> Result<Arc<dyn Template>>;
}

/// Opaque parse-time configuration, passed through to the parser on every
/// cache miss.
///
/// # Sharp edge: options are not part of the cache key
///
/// Entries are keyed by (scope, name) only. Once a partial has been parsed
/// within a scope, later [`load`](crate::PartialCache::load) calls return the
/// existing entry even when called with different options — the new options
/// are never consulted. A single render pass is expected to use one logical
/// parse configuration; callers that vary options per call must not rely on
/// a second load reflecting them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseOptions {
    values: HashMap<String, Value>,
}

impl ParseOptions {
    /// Create an empty options bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any previous value for `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up an option by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Whether no options have been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

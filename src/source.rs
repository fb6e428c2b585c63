//! Template source capability.
//!
//! A [`TemplateSource`] resolves a partial name to raw template text. Where
//! that text lives (file system, database, in-memory table) is the caller's
//! concern; the cache only consumes this boundary.

use anyhow::Result;

/// Resolves partial names to raw template text.
///
/// Implementations are injected into a [`RenderScope`](crate::RenderScope)
/// and queried by [`PartialCache::load`](crate::PartialCache::load) on a
/// cache miss. A source is read at most once per (scope, name) pair for
/// successful loads; failed reads are retried on the next load.
///
/// # Errors
///
/// `read` fails when the named partial does not exist or cannot be read.
/// The cache surfaces that failure as
/// [`LoadError::SourceNotFound`](crate::LoadError::SourceNotFound) without
/// caching it.
pub trait TemplateSource: Send + Sync {
    /// Return the raw template text for `name`.
    fn read(&self, name: &str) -> Result<String>;
}

//! Memoizing partial loader.
//!
//! [`PartialCache::load`] is the single entry point: given a partial name, a
//! [`RenderScope`], and [`ParseOptions`], it returns the parsed template,
//! reading from the scope's source and invoking the parser at most once per
//! (scope, name) pair. Entries live in a [`PartialStore`] owned by the scope
//! and are discarded with it; there is no eviction and no invalidation on
//! source change within a scope's lifetime.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use crate::error::LoadError;
use crate::parser::{ParseOptions, Template, TemplateParser};
use crate::scope::RenderScope;

/// Hit/miss counters for one scope's partial store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Loads answered from the store.
    pub hits: usize,
    /// Loads that had to read and parse.
    pub misses: usize,
}

impl CacheStats {
    /// Hit rate as a percentage of all lookups, 0.0 when none happened yet.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Per-scope store of parsed partials.
///
/// Created lazily by [`RenderScope::partial_store`] and owned exclusively by
/// that scope. Entries are immutable once stored.
pub(crate) struct PartialStore {
    entries: DashMap<String, Arc<dyn Template>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl PartialStore {
    pub(crate) fn new() -> Self {
        Self {
            entries: DashMap::new(),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Look up a partial by name, counting the lookup as a hit or miss.
    fn get(&self, name: &str) -> Option<Arc<dyn Template>> {
        match self.entries.get(name) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(Arc::clone(entry.value()))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a parsed partial, returning the instance that ended up in the
    /// store.
    ///
    /// First writer wins: when two misses race on the same name, the second
    /// parse result is discarded and both callers receive the first.
    fn insert(&self, name: String, template: Arc<dyn Template>) -> Arc<dyn Template> {
        Arc::clone(self.entries.entry(name).or_insert(template).value())
    }

    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl fmt::Debug for PartialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialStore")
            .field("entries", &self.entries.len())
            .field("stats", &self.stats())
            .finish()
    }
}

/// Memoizing loader for named template partials.
///
/// Wraps an injected [`TemplateParser`] and memoizes parse results into the
/// [`RenderScope`] passed to each [`load`](Self::load) call. The cache
/// itself is stateless across scopes and cheap to share.
pub struct PartialCache {
    parser: Arc<dyn TemplateParser>,
}

impl PartialCache {
    /// Create a cache around an injected parser.
    #[must_use]
    pub fn new(parser: Arc<dyn TemplateParser>) -> Self {
        Self {
            parser,
        }
    }

    /// Load the named partial through `scope`, reading and parsing at most
    /// once per (scope, name) pair.
    ///
    /// On a hit the stored template is returned as-is and `options` is not
    /// consulted (see [`ParseOptions`] for the implications). On a miss the
    /// scope's source is read, the text parsed under `options`, and the
    /// result stored before being returned.
    ///
    /// # Errors
    ///
    /// - [`LoadError::SourceNotFound`] when the scope's source cannot
    ///   resolve `name`.
    /// - [`LoadError::ParseFailure`] when the parser rejects the retrieved
    ///   text.
    ///
    /// Neither failure is cached; the next load for the same name retries
    /// the full read/parse path.
    pub fn load(
        &self,
        name: &str,
        scope: &RenderScope,
        options: &ParseOptions,
    ) -> Result<Arc<dyn Template>, LoadError> {
        let store = scope.partial_store();

        if let Some(template) = store.get(name) {
            tracing::debug!("partial cache hit for '{}'", name);
            return Ok(template);
        }

        tracing::debug!("partial cache miss for '{}', reading from source", name);
        let text =
            scope.source().read(name).map_err(|err| LoadError::source_not_found(name, err))?;

        let template =
            self.parser.parse(&text, options).map_err(|err| LoadError::parse_failure(name, err))?;

        tracing::debug!("storing parsed partial '{}' ({} bytes of source)", name, text.len());
        Ok(store.insert(name.to_string(), template))
    }
}

impl fmt::Debug for PartialCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialCache").finish_non_exhaustive()
    }
}

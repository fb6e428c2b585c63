//! Render scope: the caller-owned context for one rendering pass.
//!
//! A [`RenderScope`] carries the injected [`TemplateSource`] and hosts the
//! partial store that [`PartialCache`](crate::PartialCache) memoizes into.
//! Cache lifetime is bound to scope lifetime: the store is created lazily on
//! the first load against the scope and dropped with it. Two scopes never
//! share entries, even when they share the same source.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::cache::{CacheStats, PartialStore};
use crate::source::TemplateSource;

/// Execution scope for a single rendering pass.
///
/// Identity matters, not value: every `RenderScope` instance owns its own
/// partial store. Construct one scope per render pass and share it (behind
/// an [`Arc`] if needed) across everything participating in that pass.
pub struct RenderScope {
    source: Arc<dyn TemplateSource>,
    partials: OnceLock<PartialStore>,
}

impl RenderScope {
    /// Create a scope around an injected template source.
    ///
    /// The partial store is not created here; it materializes on the first
    /// load targeting this scope.
    #[must_use]
    pub fn new(source: Arc<dyn TemplateSource>) -> Self {
        Self {
            source,
            partials: OnceLock::new(),
        }
    }

    /// The template source injected into this scope.
    #[must_use]
    pub fn source(&self) -> &dyn TemplateSource {
        self.source.as_ref()
    }

    /// Get this scope's partial store, creating it on first use.
    ///
    /// Idempotent: every call returns the same store instance for the
    /// lifetime of the scope. Creation is atomic, so concurrent first
    /// accesses never observe a partially constructed store.
    pub(crate) fn partial_store(&self) -> &PartialStore {
        self.partials.get_or_init(|| {
            tracing::trace!("creating partial store for scope");
            PartialStore::new()
        })
    }

    /// Whether the partial store has been created yet.
    ///
    /// Stays `false` until the first load targets this scope.
    #[must_use]
    pub fn has_partial_store(&self) -> bool {
        self.partials.get().is_some()
    }

    /// Hit/miss statistics for this scope's partial store, or `None` if the
    /// store has not been created yet.
    #[must_use]
    pub fn partial_cache_stats(&self) -> Option<CacheStats> {
        self.partials.get().map(PartialStore::stats)
    }
}

impl fmt::Debug for RenderScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderScope")
            .field("partials", &self.partials.get())
            .finish_non_exhaustive()
    }
}

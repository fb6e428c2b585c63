//! Scope-bound memoization for named template partials.
//!
//! A *partial* is a named, reusable template fragment referenced by another
//! template. Rendering a document that references the same partial many
//! times should not read and parse it many times; this crate provides the
//! cache that guarantees it, bounded to a single rendering pass.
//!
//! # Architecture Overview
//!
//! Two pieces compose the crate:
//!
//! - [`RenderScope`] — the caller-owned execution context for one rendering
//!   pass. It carries the injected [`TemplateSource`] and hosts the partial
//!   store, which is created lazily on first use and dropped with the scope.
//!   Scope identity bounds cache lifetime: two scopes never share entries,
//!   even when backed by the same source.
//! - [`PartialCache`] — the memoizing loader. [`PartialCache::load`] resolves
//!   a partial name through the scope's source, parses it with the injected
//!   [`TemplateParser`], and stores the result so that each (scope, name)
//!   pair is read and parsed at most once.
//!
//! The parsing engine, the source backing store, and the renderer that
//! executes a [`Template`] all live outside this crate; they are injected
//! through the capability traits and only their failure modes surface here,
//! as [`LoadError`].
//!
//! # Core Modules
//!
//! - [`cache`] - The memoizing loader and per-scope store with hit/miss stats
//! - [`scope`] - Render scope hosting injected capabilities and the store
//! - [`parser`] - Parser/template capability traits and [`ParseOptions`]
//! - [`source`] - Template source capability trait
//! - [`error`] - The [`LoadError`] taxonomy
//!
//! # Caching Contract
//!
//! - One successful read and one successful parse per (scope, name) pair;
//!   every later load within the scope returns the same stored template
//!   instance.
//! - [`ParseOptions`] are **not** part of the cache key. A load that hits
//!   the store returns the entry parsed under the *original* options and
//!   ignores the ones it was called with. See [`ParseOptions`] for why this
//!   sharp edge is deliberate.
//! - Failures are never cached. A `SourceNotFound` or `ParseFailure` load
//!   leaves the store untouched, so the next load for that name retries the
//!   full read/parse path.
//! - Scopes may be shared across threads. Concurrent misses on one name may
//!   duplicate the read/parse work, but the store keeps a single winning
//!   instance that all callers receive.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use partial_cache::{
//!     ParseOptions, PartialCache, RenderScope, Template, TemplateParser, TemplateSource,
//! };
//!
//! struct Sources;
//!
//! impl TemplateSource for Sources {
//!     fn read(&self, name: &str) -> anyhow::Result<String> {
//!         match name {
//!             "footer" => Ok("-- the footer --".to_string()),
//!             _ => anyhow::bail!("no such partial: {name}"),
//!         }
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Verbatim(String);
//!
//! impl Template for Verbatim {
//!     fn render(&self) -> anyhow::Result<String> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! struct VerbatimParser;
//!
//! impl TemplateParser for VerbatimParser {
//!     fn parse(&self, text: &str, _options: &ParseOptions) -> anyhow::Result<Arc<dyn Template>> {
//!         Ok(Arc::new(Verbatim(text.to_string())))
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let cache = PartialCache::new(Arc::new(VerbatimParser));
//!     let scope = RenderScope::new(Arc::new(Sources));
//!
//!     let footer = cache.load("footer", &scope, &ParseOptions::new())?;
//!     assert_eq!(footer.render()?, "-- the footer --");
//!
//!     // The second load is served from the scope's store.
//!     let again = cache.load("footer", &scope, &ParseOptions::new())?;
//!     assert!(Arc::ptr_eq(&footer, &again));
//!     Ok(())
//! }
//! ```

// Core functionality modules
pub mod cache;
pub mod error;
pub mod scope;

// Capability boundaries
pub mod parser;
pub mod source;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cache::{CacheStats, PartialCache};
pub use error::LoadError;
pub use parser::{ParseOptions, Template, TemplateParser};
pub use scope::RenderScope;
pub use source::TemplateSource;

//! Test doubles for the source and parser capabilities.
//!
//! These stubs count how often they are invoked, which is how the caching
//! contract is verified: a memoized load must not touch the source or the
//! parser again. They are available to this crate's own tests and, behind
//! the `test-utils` feature, to downstream test suites.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow, bail};

use crate::parser::{ParseOptions, Template, TemplateParser};
use crate::source::TemplateSource;

/// In-memory template source backed by a name → body table.
///
/// Counts every `read` call, including failed ones.
pub struct StubSource {
    partials: HashMap<String, String>,
    read_count: AtomicUsize,
}

impl StubSource {
    /// Build a source from (name, body) pairs.
    pub fn new<I, K, V>(partials: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            partials: partials.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            read_count: AtomicUsize::new(0),
        }
    }

    /// How many times `read` has been called on this source.
    pub fn read_count(&self) -> usize {
        self.read_count.load(Ordering::SeqCst)
    }
}

impl TemplateSource for StubSource {
    fn read(&self, name: &str) -> Result<String> {
        self.read_count.fetch_add(1, Ordering::SeqCst);
        self.partials.get(name).cloned().ok_or_else(|| anyhow!("unknown partial '{}'", name))
    }
}

/// Parser stub that wraps the source text into a [`StubTemplate`].
#[derive(Default)]
pub struct StubParser {
    parse_count: AtomicUsize,
}

impl StubParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `parse` has been called on this parser.
    pub fn parse_count(&self) -> usize {
        self.parse_count.load(Ordering::SeqCst)
    }
}

impl TemplateParser for StubParser {
    fn parse(&self, text: &str, options: &ParseOptions) -> Result<Arc<dyn Template>> {
        self.parse_count.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(StubTemplate {
            body: text.to_string(),
            options: options.clone(),
        }))
    }
}

/// Template stub that renders to its source text verbatim.
#[derive(Debug)]
pub struct StubTemplate {
    body: String,
    options: ParseOptions,
}

impl StubTemplate {
    /// The options this template was parsed under.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }
}

impl Template for StubTemplate {
    fn render(&self) -> Result<String> {
        Ok(self.body.clone())
    }
}

/// Parser stub that rejects every input, for exercising parse-failure paths.
#[derive(Default)]
pub struct FailingParser {
    parse_count: AtomicUsize,
}

impl FailingParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `parse` has been attempted on this parser.
    pub fn parse_count(&self) -> usize {
        self.parse_count.load(Ordering::SeqCst)
    }
}

impl TemplateParser for FailingParser {
    fn parse(&self, text: &str, _options: &ParseOptions) -> Result<Arc<dyn Template>> {
        self.parse_count.fetch_add(1, Ordering::SeqCst);
        bail!("syntax error in template of {} bytes", text.len())
    }
}

//! Scope-bound cache lifetime: isolation between scopes, lazy store
//! creation, and behavior under shared-scope concurrency.

use std::sync::Arc;
use std::thread;

use partial_cache::test_utils::{StubParser, StubSource};
use partial_cache::{ParseOptions, PartialCache, RenderScope};

use crate::init_logging;

/// Cache state is stored per scope: two scopes over one shared source each
/// read independently.
#[test]
fn test_cache_state_is_stored_per_scope() {
    init_logging();
    let shared_source = Arc::new(StubSource::new([("my_partial", "my shared value")]));
    let cache = PartialCache::new(Arc::new(StubParser::new()));
    let scope_one = RenderScope::new(shared_source.clone());
    let scope_two = RenderScope::new(shared_source.clone());
    let options = ParseOptions::new();

    for _ in 0..2 {
        cache.load("my_partial", &scope_one, &options).unwrap();
    }
    cache.load("my_partial", &scope_two, &options).unwrap();

    assert_eq!(shared_source.read_count(), 2);
}

/// Scopes never share entries: the stored template instances are distinct
/// even though name and source coincide.
#[test]
fn test_scopes_do_not_share_template_instances() {
    init_logging();
    let shared_source = Arc::new(StubSource::new([("my_partial", "my shared value")]));
    let cache = PartialCache::new(Arc::new(StubParser::new()));
    let scope_one = RenderScope::new(shared_source.clone());
    let scope_two = RenderScope::new(shared_source);
    let options = ParseOptions::new();

    let one = cache.load("my_partial", &scope_one, &options).unwrap();
    let two = cache.load("my_partial", &scope_two, &options).unwrap();

    assert!(!Arc::ptr_eq(&one, &two));
    assert_eq!(one.render().unwrap(), two.render().unwrap());
}

/// The partial store does not exist on a fresh scope; it materializes on
/// the first load targeting the scope.
#[test]
fn test_store_is_absent_until_first_load() {
    init_logging();
    let cache = PartialCache::new(Arc::new(StubParser::new()));
    let scope = RenderScope::new(Arc::new(StubSource::new([("my_partial", "body")])));

    assert!(!scope.has_partial_store());
    assert!(scope.partial_cache_stats().is_none());

    cache.load("my_partial", &scope, &ParseOptions::new()).unwrap();

    assert!(scope.has_partial_store());
    assert!(scope.partial_cache_stats().is_some());
}

/// A scope shared across threads serves every caller the same stored
/// instance, and dropping the scope drops its cache with it.
#[test]
fn test_shared_scope_under_concurrent_loads() {
    init_logging();
    let source = Arc::new(StubSource::new([("shared", "shared body")]));
    let cache = Arc::new(PartialCache::new(Arc::new(StubParser::new())));
    let scope = Arc::new(RenderScope::new(source.clone()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let scope = Arc::clone(&scope);
            thread::spawn(move || cache.load("shared", &scope, &ParseOptions::new()).unwrap())
        })
        .collect();
    let templates: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for template in &templates {
        assert!(Arc::ptr_eq(template, &templates[0]));
        assert_eq!(template.render().unwrap(), "shared body");
    }

    // A fresh scope over the same source starts cold.
    drop(scope);
    let fresh = RenderScope::new(source.clone());
    let reads_before = source.read_count();
    cache.load("shared", &fresh, &ParseOptions::new()).unwrap();
    assert_eq!(source.read_count(), reads_before + 1);
}

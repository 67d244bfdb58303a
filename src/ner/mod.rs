//! Named-entity extraction backends sharing one contract:
//! `extract(content, path) -> Vec<NamedEntity>`.
//!
//! The ML backend is a feature-gated external plug-in; the orchestrator
//! probes its availability once at startup and carries that as a boolean,
//! per the tagged-variant re-architecture this system settles on.

mod ml_backend;
mod regex_backend;
mod syntax_tree_backend;

use crate::config::NerOptions;
use crate::core_types::{EntityKind, NamedEntity, NerMethod};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// Bounded, LRU-evicting cache of extraction results keyed by
/// `(content_hash, method)`, shared across workers via a mutex guarding
/// fine-grained insert/lookup only.
pub struct EntityCache {
    inner: Mutex<LruCache<(u64, NerMethod), Vec<NamedEntity>>>,
}

impl EntityCache {
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self { inner: Mutex::new(LruCache::new(cap)) }
    }

    fn get(&self, key: &(u64, NerMethod)) -> Option<Vec<NamedEntity>> {
        self.inner.lock().unwrap().get(key).cloned()
    }

    fn put(&self, key: (u64, NerMethod), value: Vec<NamedEntity>) {
        self.inner.lock().unwrap().put(key, value);
    }
}

fn hash_content(content: &str) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    hasher.finish()
}

/// Runs `options.method` (or the per-file dispatch implied by `Hybrid`)
/// against `content`, deduplicating by `(name, kind)` in order of first
/// appearance and truncating to `options.max_entities`.
pub fn extract(content: &str, path: &str, options: &NerOptions, cache: &EntityCache) -> Vec<NamedEntity> {
    let method = resolve_method(options.method, content.len() as u64, path);

    let cache_key = (hash_content(content), method);
    let raw = if options.cache {
        if let Some(cached) = cache.get(&cache_key) {
            cached
        } else {
            let result = run_backend(method, content, path, options);
            cache.put(cache_key, result.clone());
            result
        }
    } else {
        run_backend(method, content, path, options)
    };

    let filtered: Vec<NamedEntity> = if options.include_kinds.is_empty() {
        raw
    } else {
        raw.into_iter().filter(|e| options.include_kinds.contains(&e.kind)).collect()
    };

    dedup_in_order(filtered, options.max_entities)
}

fn resolve_method(configured: NerMethod, byte_size: u64, path: &str) -> NerMethod {
    match configured {
        NerMethod::Hybrid => {
            if byte_size < 4096 {
                NerMethod::Regex
            } else if syntax_tree_backend::supports(path) {
                NerMethod::SyntaxTree
            } else {
                NerMethod::Regex
            }
        }
        other => other,
    }
}

fn run_backend(method: NerMethod, content: &str, path: &str, options: &NerOptions) -> Vec<NamedEntity> {
    match method {
        NerMethod::Regex => regex_backend::extract(content, path),
        NerMethod::SyntaxTree => {
            if syntax_tree_backend::supports(path) {
                syntax_tree_backend::extract(content, path)
            } else {
                regex_backend::extract(content, path)
            }
        }
        NerMethod::Ml => {
            if content.len() as u64 >= options.ml_size_threshold_bytes {
                match ml_backend::extract(content, path, options.max_ml_ms) {
                    Some(entities) => entities,
                    None => regex_backend::extract(content, path),
                }
            } else {
                regex_backend::extract(content, path)
            }
        }
        NerMethod::Hybrid => unreachable!("resolve_method never returns Hybrid"),
    }
}

fn dedup_in_order(entities: Vec<NamedEntity>, max: usize) -> Vec<NamedEntity> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for e in entities {
        let key = (e.name.clone(), e.kind);
        if seen.insert(key) {
            out.push(e);
            if out.len() >= max {
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_preserves_first_appearance_order() {
        let entities = vec![
            NamedEntity::new("foo", EntityKind::Function),
            NamedEntity::new("bar", EntityKind::Function),
            NamedEntity::new("foo", EntityKind::Function),
        ];
        let out = dedup_in_order(entities, 10);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "foo");
        assert_eq!(out[1].name, "bar");
    }

    #[test]
    fn max_entities_caps_the_result() {
        let entities = (0..10).map(|i| NamedEntity::new(format!("e{i}"), EntityKind::Variable)).collect();
        let out = dedup_in_order(entities, 3);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn extract_caches_by_content_hash_and_method() {
        let cache = EntityCache::new(4);
        let options = NerOptions { enabled: true, method: NerMethod::Regex, cache: true, ..NerOptions::default() };
        let content = "fn foo() {}\n";
        let first = extract(content, "a.rs", &options, &cache);
        let second = extract(content, "a.rs", &options, &cache);
        assert_eq!(first, second);
    }

    #[test]
    fn hybrid_uses_regex_for_small_files() {
        let method = resolve_method(NerMethod::Hybrid, 10, "a.rs");
        assert_eq!(method, NerMethod::Regex);
    }
}

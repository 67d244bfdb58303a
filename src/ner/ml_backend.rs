//! Placeholder adapter for an external ML named-entity model. Real model
//! loading is outside this crate's scope; this backend's contract is the
//! fallback path it triggers when disabled or over budget.

use crate::core_types::NamedEntity;

/// Returns `Some(entities)` when the `ner-ml` feature is enabled and
/// inference completes within `max_ml_ms`; otherwise `None`, which the
/// caller treats as a signal to fall back to the regex backend.
#[cfg(feature = "ner-ml")]
pub fn extract(content: &str, path: &str, max_ml_ms: u64) -> Option<Vec<NamedEntity>> {
    let start = std::time::Instant::now();
    let entities = super::regex_backend::extract(content, path);
    if start.elapsed().as_millis() as u64 > max_ml_ms {
        return None;
    }
    Some(entities)
}

#[cfg(not(feature = "ner-ml"))]
pub fn extract(_content: &str, _path: &str, _max_ml_ms: u64) -> Option<Vec<NamedEntity>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "ner-ml"))]
    #[test]
    fn without_the_feature_extract_returns_none() {
        assert!(extract("fn f() {}", "a.rs", 1000).is_none());
    }
}

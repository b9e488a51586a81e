//! Controlled-vocabulary lookup.
//!
//! The `xMetaDissPlus` mapper resolves a record's resource type to external
//! scheme codes (DINI publication type, DCMI type) through the
//! [`VocabularyLookup`] trait. Implementations are read-only and may be
//! cached by the caller.
//!
//! [`StaticVocabulary`] is an in-memory implementation, filled item by item
//! or loaded from the JSON export of a vocabulary:
//!
//! ```ignore
//! use dnb_xmetadiss::vocabulary::{StaticVocabulary, VocabularyLookup};
//!
//! let vocab = StaticVocabulary::new().load_json("resourcetypes", r#"[
//!     {"id": "publication-article", "props": {"openaire_type": "article"}}
//! ]"#)?;
//! let props = vocab.props("resourcetypes", &["props.openaire_type"], "publication-article")?;
//! assert_eq!(props["props.openaire_type"].as_deref(), Some("article"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{DnbError, Result};

/// Name of the resource-type vocabulary.
pub const RESOURCE_TYPES: &str = "resourcetypes";

/// Resolves vocabulary item properties.
pub trait VocabularyLookup {
    /// Resolve the given dotted property paths of vocabulary item `id`.
    ///
    /// The returned map contains every requested path, in request order,
    /// with `None` for paths the item does not define.
    ///
    /// # Errors
    ///
    /// Returns [`DnbError::UnmappedVocabulary`] if the vocabulary or the item
    /// is unknown.
    fn props(
        &self,
        vocabulary: &str,
        properties: &[&str],
        id: &str,
    ) -> Result<IndexMap<String, Option<String>>>;
}

/// In-memory vocabulary store.
#[derive(Debug, Clone, Default)]
pub struct StaticVocabulary {
    vocabularies: IndexMap<String, IndexMap<String, Value>>,
}

impl StaticVocabulary {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an item. `item` is the item's JSON object; property
    /// paths are resolved against it.
    pub fn insert(&mut self, vocabulary: &str, id: &str, item: Value) {
        self.vocabularies
            .entry(vocabulary.to_string())
            .or_default()
            .insert(id.to_string(), item);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_item(mut self, vocabulary: &str, id: &str, item: Value) -> Self {
        self.insert(vocabulary, id, item);
        self
    }

    /// Load a JSON array of items, each carrying an `id` string.
    ///
    /// Items without an `id` are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or not an array.
    pub fn load_json(mut self, vocabulary: &str, json: &str) -> Result<Self> {
        let items: Vec<Value> = serde_json::from_str(json)?;
        for item in items {
            let Some(id) = item.get("id").and_then(Value::as_str).map(str::to_string) else {
                tracing::warn!(vocabulary, "skipping vocabulary item without id");
                continue;
            };
            self.insert(vocabulary, &id, item);
        }
        Ok(self)
    }

    /// Number of items in a vocabulary.
    #[must_use]
    pub fn len(&self, vocabulary: &str) -> usize {
        self.vocabularies.get(vocabulary).map_or(0, IndexMap::len)
    }

    /// Whether the store holds no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vocabularies.values().all(IndexMap::is_empty)
    }
}

impl VocabularyLookup for StaticVocabulary {
    fn props(
        &self,
        vocabulary: &str,
        properties: &[&str],
        id: &str,
    ) -> Result<IndexMap<String, Option<String>>> {
        let item = self
            .vocabularies
            .get(vocabulary)
            .and_then(|items| items.get(id))
            .ok_or_else(|| DnbError::UnmappedVocabulary {
                vocabulary: vocabulary.to_string(),
                id: id.to_string(),
            })?;

        Ok(properties
            .iter()
            .map(|path| ((*path).to_string(), resolve_path(item, path)))
            .collect())
    }
}

/// Walk a dotted path through nested JSON objects.
///
/// Strings resolve to themselves, numbers and booleans to their JSON text;
/// null, arrays, objects and missing keys resolve to `None`.
fn resolve_path(item: &Value, path: &str) -> Option<String> {
    let value = path
        .split('.')
        .try_fold(item, |current, segment| current.get(segment))?;

    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

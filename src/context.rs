//! Per-request context store capability.
//!
//! Instrumentation elsewhere files request and response data in a
//! per-request store. The pipeline only reads it, one address at a time,
//! through [`ContextStore::get`]. The address-to-key mapping lives in
//! [`AddressKey::context_key`].

use std::collections::HashMap;

use serde_json::Value;

use crate::address::AddressKey;
use crate::span::Span;

/// Read access to the data recorded for one request.
///
/// Returning `None` means "not available for this request"; the pipeline
/// skips the address rather than treating it as an error.
pub trait ContextStore {
    /// Returns the data recorded for `address` on `span`'s request, if any.
    fn get(&self, address: AddressKey, span: &dyn Span) -> Option<Value>;
}

/// A context store backed by a map from context key to value.
///
/// Keys are the context spellings, e.g. `http.request.method`. The store is
/// scoped to a single request, so the span argument is not consulted.
///
/// # Examples
///
/// ```
/// use appsec_processor::{AddressKey, ContextStore, MemoryContextStore, MemorySpan};
/// use serde_json::json;
///
/// let mut store = MemoryContextStore::new();
/// store.set_item("http.request.method", json!("GET"));
///
/// let span = MemorySpan::web();
/// assert_eq!(store.get(AddressKey::RequestMethod, &span), Some(json!("GET")));
/// assert_eq!(store.get(AddressKey::RequestQuery, &span), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryContextStore {
    items: HashMap<String, Value>,
}

impl MemoryContextStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a value under a context key.
    pub fn set_item(&mut self, key: impl Into<String>, value: Value) {
        self.items.insert(key.into(), value);
    }

    /// Records a value under the context key of `address`.
    pub fn set_address(&mut self, address: AddressKey, value: Value) {
        self.set_item(address.context_key(), value);
    }

    /// Returns the value recorded under a context key.
    pub fn get_item(&self, key: &str) -> Option<&Value> {
        self.items.get(key)
    }

    /// Returns the number of recorded items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ContextStore for MemoryContextStore {
    fn get(&self, address: AddressKey, _span: &dyn Span) -> Option<Value> {
        self.get_item(address.context_key()).cloned()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for MemoryContextStore {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

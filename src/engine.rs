//! Detection engine adapter: the seam to the external rule-matching engine.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::address::AddressKey;
use crate::error::EngineError;

/// An external rule-matching engine.
///
/// Implementations wrap whatever actually evaluates the rules. Once built,
/// an engine is shared by every thread that finishes spans, so evaluation
/// must not need `&mut self` or external locking.
///
/// # Invariants
///
/// Implementations MUST:
/// - Report every address their rules read through
///   [`required_addresses`](Self::required_addresses)
/// - Return `Ok(None)` from [`run`](Self::run) when no rule matched
/// - Return `Err` from [`run`](Self::run) only when evaluation itself broke
///
/// # Examples
///
/// ```
/// use appsec_processor::{AddressKey, DetectionData, DetectionEngine, DetectionResult, EngineError};
///
/// struct BlockGitPaths;
///
/// impl DetectionEngine for BlockGitPaths {
///     fn required_addresses(&self) -> Vec<AddressKey> {
///         vec![AddressKey::RequestUriRaw]
///     }
///
///     fn run(&self, data: &DetectionData) -> Result<Option<DetectionResult>, EngineError> {
///         let hit = data
///             .get(AddressKey::RequestUriRaw)
///             .and_then(|uri| uri.as_str())
///             .is_some_and(|uri| uri.contains("/.git"));
///         Ok(hit.then(|| DetectionResult::new(r#"[{"rule":"git-probe"}]"#)))
///     }
/// }
/// ```
pub trait DetectionEngine: Send + Sync {
    /// Returns the addresses the loaded rules read.
    fn required_addresses(&self) -> Vec<AddressKey>;

    /// Evaluates the rules against one span's data.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if evaluation could not be carried out.
    fn run(&self, data: &DetectionData) -> Result<Option<DetectionResult>, EngineError>;

    /// Returns the version of the loaded rule set, if the engine tracks one.
    ///
    /// Read only after a match, on a best-effort basis.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if the engine's metadata could not be read.
    fn ruleset_version(&self) -> Result<Option<String>, EngineError> {
        Ok(None)
    }
}

/// The data collected for one span, keyed by address.
///
/// Only holds addresses that were both needed and present in the context
/// store; there are no placeholder entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionData {
    entries: BTreeMap<AddressKey, Value>,
}

impl DetectionData {
    /// Creates an empty data map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the value for an address, replacing any previous one.
    pub fn insert(&mut self, address: AddressKey, value: Value) {
        self.entries.insert(address, value);
    }

    /// Returns the value recorded for an address.
    pub fn get(&self, address: AddressKey) -> Option<&Value> {
        self.entries.get(&address)
    }

    /// Returns whether a value is recorded for an address.
    pub fn contains(&self, address: AddressKey) -> bool {
        self.entries.contains_key(&address)
    }

    /// Returns the number of recorded addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the recorded addresses in declaration order.
    pub fn addresses(&self) -> impl Iterator<Item = AddressKey> + '_ {
        self.entries.keys().copied()
    }

    /// Iterates `(address, value)` entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (AddressKey, &Value)> {
        self.entries.iter().map(|(address, value)| (*address, value))
    }

    /// Renders the data as a JSON object keyed by engine address string.
    pub fn to_value(&self) -> Value {
        let object: Map<String, Value> = self
            .iter()
            .map(|(address, value)| (address.as_str().to_string(), value.clone()))
            .collect();
        Value::Object(object)
    }
}

/// A match reported by the engine: the serialized trigger array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    triggers: String,
}

impl DetectionResult {
    /// Wraps the engine's serialized trigger array.
    pub fn new(triggers: impl Into<String>) -> Self {
        Self {
            triggers: triggers.into(),
        }
    }

    /// Serializes a structured trigger array.
    pub fn from_value(triggers: &Value) -> Self {
        Self::new(triggers.to_string())
    }

    /// Returns the serialized trigger array as the engine produced it.
    pub fn as_str(&self) -> &str {
        &self.triggers
    }

    /// Returns the `{"triggers":<result>}` envelope written to the span.
    pub fn envelope(&self) -> String {
        format!(r#"{{"triggers":{}}}"#, self.triggers)
    }
}

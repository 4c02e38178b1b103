//! The span capability the pipeline writes to, and the names it writes.

use std::collections::BTreeMap;

/// Tag and metric names written on processed spans.
///
/// These are read by downstream consumers and must not change.
pub mod tags {
    /// Metric set to `1.0` on every web span while detection is active.
    pub const APPSEC_ENABLED: &str = "_dd.appsec.enabled";
    /// Tag naming the runtime family.
    pub const RUNTIME_FAMILY: &str = "_dd.runtime_family";
    /// Tag set to `"true"` when the engine reports a match.
    pub const APPSEC_EVENT: &str = "appsec.event";
    /// Tag carrying the `{"triggers": ...}` envelope.
    pub const APPSEC_JSON: &str = "_dd.appsec.json";
    /// Tag forcing the trace to be kept.
    pub const MANUAL_KEEP: &str = "manual.keep";
    /// Metric carrying the sampling priority.
    pub const SAMPLING_PRIORITY: &str = "_sampling_priority_v1";
    /// Tag naming the product that originated the trace.
    pub const ORIGIN: &str = "_dd.origin";
    /// Tag carrying the rule-set version, when the engine exposes one.
    pub const EVENT_RULES_VERSION: &str = "_dd.appsec.event_rules.version";
}

/// Value of [`tags::RUNTIME_FAMILY`].
pub const RUNTIME_FAMILY: &str = "rust";

/// Value of [`tags::ORIGIN`] when this pipeline claims the trace.
pub const APPSEC_ORIGIN: &str = "appsec";

/// Sampling priority meaning "user asked to keep".
pub const USER_KEEP: f64 = 2.0;

/// Span type discriminators.
pub mod span_types {
    /// Inbound web request.
    pub const WEB: &str = "web";
}

/// A traced unit of work, as seen by the pipeline.
///
/// The tracer owns the span; the pipeline only reads its type and tags and
/// writes tags and metrics.
pub trait Span {
    /// Returns the span type discriminator, e.g. [`span_types::WEB`].
    fn span_type(&self) -> Option<&str>;

    /// Returns a string tag, if set.
    fn get_tag(&self, key: &str) -> Option<&str>;

    /// Sets a string tag, replacing any previous value.
    fn set_tag(&mut self, key: &str, value: &str);

    /// Sets a numeric metric, replacing any previous value.
    fn set_metric(&mut self, key: &str, value: f64);

    /// Returns whether this span is an inbound web request.
    fn is_web(&self) -> bool {
        self.span_type() == Some(span_types::WEB)
    }
}

/// An in-memory span.
///
/// Useful for tests and for tracers that buffer tags before export.
///
/// # Examples
///
/// ```
/// use appsec_processor::{MemorySpan, Span};
///
/// let mut span = MemorySpan::web();
/// span.set_tag("http.method", "GET");
///
/// assert!(span.is_web());
/// assert_eq!(span.get_tag("http.method"), Some("GET"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySpan {
    span_type: Option<String>,
    tags: BTreeMap<String, String>,
    metrics: BTreeMap<String, f64>,
}

impl MemorySpan {
    /// Creates a span with the given type.
    pub fn new(span_type: impl Into<String>) -> Self {
        Self {
            span_type: Some(span_type.into()),
            ..Self::default()
        }
    }

    /// Creates a web span.
    pub fn web() -> Self {
        Self::new(span_types::WEB)
    }

    /// Returns a metric, if set.
    pub fn get_metric(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).copied()
    }

    /// Returns every tag, sorted by name.
    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    /// Returns every metric, sorted by name.
    pub fn metrics(&self) -> &BTreeMap<String, f64> {
        &self.metrics
    }
}

impl Span for MemorySpan {
    fn span_type(&self) -> Option<&str> {
        self.span_type.as_deref()
    }

    fn get_tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    fn set_tag(&mut self, key: &str, value: &str) {
        self.tags.insert(key.to_string(), value.to_string());
    }

    fn set_metric(&mut self, key: &str, value: f64) {
        self.metrics.insert(key.to_string(), value);
    }
}

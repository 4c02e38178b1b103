//! Security detection on finished web-request spans.
//!
//! This crate sits on the span lifecycle of a tracer. For each finished web
//! span it:
//! - **Collects** the request/response data a rule engine asked for, from a
//!   per-request context store
//! - **Redacts** cookies from header data and normalizes header names
//! - **Evaluates** the data with an external rule engine
//! - **Tags** the span with detection metadata on a match and forces the
//!   trace to be kept
//!
//! # Core Types
//!
//! - [`AppSecProcessor`]: The pipeline, Ready or Disabled for its lifetime
//! - [`DetectionEngine`]: Seam to the external rule-matching engine
//! - [`AddressKey`] / [`AddressRegistry`]: What data the engine needs
//! - [`headers::HeaderMap`]: Cookie-free, lower-cased headers
//! - [`Span`] / [`ContextStore`]: Capabilities supplied by the tracer
//! - [`ProcessorConfig`]: Where the rule file lives
//!
//! # Examples
//!
//! ```
//! use appsec_processor::{
//!     AddressKey, AppSecProcessor, DetectionData, DetectionEngine, DetectionResult,
//!     EngineError, MemoryContextStore, MemorySpan, Span, SpanProcessor,
//! };
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! struct NeverMatches;
//!
//! impl DetectionEngine for NeverMatches {
//!     fn required_addresses(&self) -> Vec<AddressKey> {
//!         vec![AddressKey::RequestQuery]
//!     }
//!
//!     fn run(&self, _data: &DetectionData) -> Result<Option<DetectionResult>, EngineError> {
//!         Ok(None)
//!     }
//! }
//!
//! let processor = AppSecProcessor::with_engine(Arc::new(NeverMatches));
//!
//! let mut store = MemoryContextStore::new();
//! store.set_item("http.request.query", json!({"q": "1"}));
//! let mut span = MemorySpan::web();
//!
//! processor.on_span_finish(&mut span, &store).expect("engine runs");
//!
//! // Baseline telemetry is always written; detection tags only on a match.
//! assert_eq!(span.get_metric("_dd.appsec.enabled"), Some(1.0));
//! assert_eq!(span.get_tag("appsec.event"), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod address;
mod config;
mod context;
mod engine;
mod error;
pub mod headers;
pub mod logging;
mod processor;
pub mod span;

pub use address::{AddressKey, AddressRegistry};
pub use config::{ProcessorConfig, DEFAULT_RULES_PATH, RULES_ENV_VAR};
pub use context::{ContextStore, MemoryContextStore};
pub use engine::{DetectionData, DetectionEngine, DetectionResult};
pub use error::{ConfigError, ConfigErrorKind, EngineError, UnknownAddress};
pub use processor::{AppSecProcessor, SpanProcessor};
pub use serde_json::Value;
pub use span::{MemorySpan, Span};

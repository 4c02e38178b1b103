//! The span-finish detection pipeline.
//!
//! # Lifecycle
//!
//! ```text
//! ProcessorConfig --from_config--> AppSecProcessor (Ready)
//!        |                              |
//!        +--- load/parse/compile fails -+--> ConfigError (or Disabled at the boundary)
//! ```
//!
//! A processor is either Ready (engine present, address registry seeded) or
//! Disabled. The state is fixed at construction and never changes.
//!
//! # Per-span flow
//!
//! For every finished web span while Ready:
//! 1. Baseline telemetry is written (detection metric, runtime family)
//! 2. Request and response headers are read and normalized once
//! 3. Every needed address with a non-null value in the context store is collected
//! 4. The engine runs; its failure propagates to the caller
//! 5. On a match, detection tags are written and the trace is kept
//! 6. Optional engine metadata is read best-effort; its failure is discarded

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::address::{AddressKey, AddressRegistry};
use crate::config::ProcessorConfig;
use crate::context::ContextStore;
use crate::engine::{DetectionData, DetectionEngine, DetectionResult};
use crate::error::{ConfigError, EngineError};
use crate::headers::{self, HeaderKind, HeaderMap};
use crate::logging::{self, LOG_TARGET};
use crate::span::{tags, Span, APPSEC_ORIGIN, RUNTIME_FAMILY, USER_KEEP};

/// Hooks invoked by the tracer around a span's lifetime.
///
/// Hooks run synchronously on whichever thread starts or finishes the span.
pub trait SpanProcessor: Send + Sync {
    /// Invoked when a span starts.
    fn on_span_start(&self, span: &dyn Span);

    /// Invoked when a span finishes, with the store holding its request data.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if detection could not be carried out.
    fn on_span_finish(
        &self,
        span: &mut dyn Span,
        context: &dyn ContextStore,
    ) -> Result<(), EngineError>;
}

#[derive(Clone)]
enum State {
    Disabled,
    Ready {
        engine: Arc<dyn DetectionEngine>,
        addresses: AddressRegistry,
    },
}

/// Security detection on finished web spans.
///
/// Cheap to clone; clones share the engine.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use appsec_processor::{
///     AddressKey, AppSecProcessor, DetectionData, DetectionEngine, DetectionResult,
///     EngineError, MemoryContextStore, MemorySpan, Span, SpanProcessor,
/// };
/// use serde_json::json;
///
/// struct FlagPost;
///
/// impl DetectionEngine for FlagPost {
///     fn required_addresses(&self) -> Vec<AddressKey> {
///         vec![AddressKey::RequestMethod]
///     }
///
///     fn run(&self, data: &DetectionData) -> Result<Option<DetectionResult>, EngineError> {
///         let post = data.get(AddressKey::RequestMethod) == Some(&json!("POST"));
///         Ok(post.then(|| DetectionResult::new(r#"[{"rule":"post"}]"#)))
///     }
/// }
///
/// let processor = AppSecProcessor::with_engine(Arc::new(FlagPost));
///
/// let mut store = MemoryContextStore::new();
/// store.set_item("http.request.method", json!("POST"));
/// let mut span = MemorySpan::web();
///
/// processor.on_span_finish(&mut span, &store).expect("engine runs");
/// assert_eq!(span.get_tag("appsec.event"), Some("true"));
/// ```
#[derive(Clone)]
pub struct AppSecProcessor {
    state: State,
}

impl AppSecProcessor {
    /// Loads the rule file, compiles it with `compile`, and returns a Ready
    /// processor.
    ///
    /// Each failure is logged under its diagnostic code before it is
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::RulesNotFound`], [`ConfigError::RulesUnreadable`] or
    ///   [`ConfigError::RulesMalformed`] if the rule file cannot be loaded
    /// - [`ConfigError::RulesRejected`] if `compile` refuses the rules
    pub fn from_config<E, F>(config: &ProcessorConfig, compile: F) -> Result<Self, ConfigError>
    where
        E: DetectionEngine + 'static,
        F: FnOnce(Value) -> Result<E, EngineError>,
    {
        let rules = config
            .load_rules()
            .inspect_err(logging::construction_failed)?;
        let engine = compile(rules)
            .map_err(|source| ConfigError::RulesRejected { source })
            .inspect_err(logging::construction_failed)?;
        Ok(Self::with_engine(Arc::new(engine)))
    }

    /// Like [`from_config`](Self::from_config), but yields a Disabled
    /// processor when construction fails.
    pub fn from_config_or_disabled<E, F>(config: &ProcessorConfig, compile: F) -> Self
    where
        E: DetectionEngine + 'static,
        F: FnOnce(Value) -> Result<E, EngineError>,
    {
        match Self::from_config(config, compile) {
            Ok(processor) => processor,
            Err(err) => {
                tracing::warn!(
                    target: LOG_TARGET,
                    code = %err.code(),
                    "AppSec detection disabled"
                );
                Self::disabled()
            }
        }
    }

    /// Returns a Ready processor around an already-built engine.
    ///
    /// The address registry is seeded from the engine's requirements plus
    /// the request header address.
    pub fn with_engine(engine: Arc<dyn DetectionEngine>) -> Self {
        let addresses = AddressRegistry::from_requirements(engine.required_addresses());
        Self {
            state: State::Ready { engine, addresses },
        }
    }

    /// Returns a processor that leaves every span untouched.
    pub fn disabled() -> Self {
        Self {
            state: State::Disabled,
        }
    }

    /// Returns whether detection is active.
    pub fn is_enabled(&self) -> bool {
        matches!(self.state, State::Ready { .. })
    }

    /// Returns the addresses collected per span, or `None` when Disabled.
    pub fn addresses(&self) -> Option<&AddressRegistry> {
        match &self.state {
            State::Ready { addresses, .. } => Some(addresses),
            State::Disabled => None,
        }
    }
}

impl fmt::Debug for AppSecProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSecProcessor")
            .field("enabled", &self.is_enabled())
            .field("addresses", &self.addresses())
            .finish()
    }
}

impl SpanProcessor for AppSecProcessor {
    fn on_span_start(&self, _span: &dyn Span) {}

    fn on_span_finish(
        &self,
        span: &mut dyn Span,
        context: &dyn ContextStore,
    ) -> Result<(), EngineError> {
        let State::Ready { engine, addresses } = &self.state else {
            return Ok(());
        };
        if !span.is_web() {
            return Ok(());
        }

        span.set_metric(tags::APPSEC_ENABLED, 1.0);
        span.set_tag(tags::RUNTIME_FAMILY, RUNTIME_FAMILY);

        // Normalized once; the data map and the tag projection share them.
        let request_headers =
            collect_headers(context, AddressKey::RequestHeadersNoCookies, &*span);
        let response_headers =
            collect_headers(context, AddressKey::ResponseHeadersNoCookies, &*span);

        let data = collect_data(
            addresses,
            context,
            &*span,
            request_headers.as_ref(),
            response_headers.as_ref(),
        );

        logging::engine_run(&data);
        let Some(result) = engine.run(&data)? else {
            return Ok(());
        };

        logging::engine_match(result.as_str());
        apply_match(
            span,
            &result,
            request_headers.as_ref(),
            response_headers.as_ref(),
        );

        if let Some(version) = best_effort("rule-set version", || engine.ruleset_version()).flatten()
        {
            span.set_tag(tags::EVENT_RULES_VERSION, &version);
        }
        Ok(())
    }
}

/// Reads one address from the store; a stored null counts as absent.
fn fetch(context: &dyn ContextStore, address: AddressKey, span: &dyn Span) -> Option<Value> {
    context.get(address, span).filter(|value| !value.is_null())
}

fn collect_headers(
    context: &dyn ContextStore,
    address: AddressKey,
    span: &dyn Span,
) -> Option<HeaderMap> {
    let raw = fetch(context, address, span)?;
    let normalized = headers::normalize_value(&raw);
    if normalized.is_none() {
        tracing::debug!(
            target: LOG_TARGET,
            address = %address,
            "ignoring header data that is not a header collection"
        );
    }
    normalized
}

fn collect_data(
    addresses: &AddressRegistry,
    context: &dyn ContextStore,
    span: &dyn Span,
    request_headers: Option<&HeaderMap>,
    response_headers: Option<&HeaderMap>,
) -> DetectionData {
    let mut data = DetectionData::new();
    for address in addresses.iter() {
        let value = match address {
            AddressKey::RequestHeadersNoCookies => request_headers.map(Value::from),
            AddressKey::ResponseHeadersNoCookies => response_headers.map(Value::from),
            _ => fetch(context, address, span),
        };
        if let Some(value) = value {
            data.insert(address, value);
        }
    }
    data
}

fn apply_match(
    span: &mut dyn Span,
    result: &DetectionResult,
    request_headers: Option<&HeaderMap>,
    response_headers: Option<&HeaderMap>,
) {
    for (kind, collected) in [
        (HeaderKind::Request, request_headers),
        (HeaderKind::Response, response_headers),
    ] {
        let Some(collected) = collected else { continue };
        for (name, value) in headers::project(kind, kind.allow_list(), collected) {
            span.set_tag(&name, &value);
        }
    }

    span.set_tag(tags::APPSEC_EVENT, "true");
    span.set_tag(tags::APPSEC_JSON, &result.envelope());

    // Overrides any earlier sampling decision.
    span.set_tag(tags::MANUAL_KEEP, "true");
    span.set_metric(tags::SAMPLING_PRIORITY, USER_KEEP);

    if span.get_tag(tags::ORIGIN).is_none() {
        span.set_tag(tags::ORIGIN, APPSEC_ORIGIN);
    }
}

/// Runs `f`, logging and discarding a failure.
fn best_effort<T, E: fmt::Display>(what: &str, f: impl FnOnce() -> Result<T, E>) -> Option<T> {
    match f() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(target: LOG_TARGET, "{} unavailable: {}", what, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MemoryContextStore;
    use crate::error::ConfigErrorKind;
    use crate::span::{span_types, MemorySpan};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    /// Engine double: fixed requirements and outcome, records what it saw.
    struct FakeEngine {
        required: Vec<AddressKey>,
        outcome: Result<Option<DetectionResult>, EngineError>,
        version: Result<Option<String>, EngineError>,
        seen: Mutex<Vec<DetectionData>>,
    }

    impl FakeEngine {
        fn new(required: Vec<AddressKey>) -> Self {
            Self {
                required,
                outcome: Ok(None),
                version: Ok(None),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn matching(mut self, triggers: &str) -> Self {
            self.outcome = Ok(Some(DetectionResult::new(triggers)));
            self
        }

        fn failing(mut self, message: &str) -> Self {
            self.outcome = Err(EngineError::new(message));
            self
        }

        fn with_version(mut self, version: Result<Option<String>, EngineError>) -> Self {
            self.version = version;
            self
        }

        fn last_seen(&self) -> DetectionData {
            self.seen
                .lock()
                .expect("lock")
                .last()
                .cloned()
                .expect("engine ran")
        }

        fn runs(&self) -> usize {
            self.seen.lock().expect("lock").len()
        }
    }

    impl DetectionEngine for FakeEngine {
        fn required_addresses(&self) -> Vec<AddressKey> {
            self.required.clone()
        }

        fn run(&self, data: &DetectionData) -> Result<Option<DetectionResult>, EngineError> {
            self.seen.lock().expect("lock").push(data.clone());
            self.outcome.clone()
        }

        fn ruleset_version(&self) -> Result<Option<String>, EngineError> {
            self.version.clone()
        }
    }

    fn store() -> MemoryContextStore {
        let mut store = MemoryContextStore::new();
        store.set_item("http.request.method", json!("GET"));
        store.set_item(
            "http.request.headers",
            json!({"Cookie": "a=b", "User-Agent": "x", "Authorization": "Bearer t"}),
        );
        store.set_item(
            "http.response.headers",
            json!({"Content-Type": "text/html", "Set-Cookie": "id=1", "Server": "nginx"}),
        );
        store
    }

    fn ready(engine: &Arc<FakeEngine>) -> AppSecProcessor {
        AppSecProcessor::with_engine(engine.clone())
    }

    #[test]
    fn registry_includes_engine_requirements_and_baseline() {
        let engine = Arc::new(FakeEngine::new(vec![AddressKey::RequestMethod]));
        let processor = ready(&engine);
        let addresses = processor.addresses().expect("ready");

        assert!(processor.is_enabled());
        assert!(addresses.is_needed(AddressKey::RequestMethod));
        assert!(addresses.is_needed(AddressKey::RequestHeadersNoCookies));
        assert_eq!(addresses.len(), 2);
    }

    #[test]
    fn disabled_processor_is_a_no_op() {
        let processor = AppSecProcessor::disabled();
        let mut span = MemorySpan::web();

        processor
            .on_span_finish(&mut span, &store())
            .expect("no-op succeeds");

        assert!(!processor.is_enabled());
        assert!(processor.addresses().is_none());
        assert_eq!(span, MemorySpan::web());
    }

    #[test]
    fn non_web_span_is_untouched() {
        let engine = Arc::new(FakeEngine::new(vec![]).matching("[]"));
        let processor = ready(&engine);
        let mut span = MemorySpan::new("sql");

        processor
            .on_span_finish(&mut span, &store())
            .expect("no-op succeeds");

        assert_eq!(span, MemorySpan::new("sql"));
        assert_eq!(engine.runs(), 0);
    }

    #[test]
    fn span_start_does_nothing() {
        let engine = Arc::new(FakeEngine::new(vec![]));
        let span = MemorySpan::web();
        ready(&engine).on_span_start(&span);
        assert!(span.tags().is_empty());
    }

    #[test]
    fn baseline_telemetry_without_match() {
        let engine = Arc::new(FakeEngine::new(vec![AddressKey::RequestMethod]));
        let mut span = MemorySpan::web();

        ready(&engine)
            .on_span_finish(&mut span, &store())
            .expect("engine runs");

        assert_eq!(span.get_metric(tags::APPSEC_ENABLED), Some(1.0));
        assert_eq!(span.get_tag(tags::RUNTIME_FAMILY), Some("rust"));
        assert_eq!(span.get_tag(tags::APPSEC_EVENT), None);
        assert_eq!(span.get_tag(tags::APPSEC_JSON), None);
        assert_eq!(span.get_tag(tags::MANUAL_KEEP), None);
        assert_eq!(span.get_tag(tags::ORIGIN), None);
        assert_eq!(span.get_tag("request.headers.user-agent"), None);
        assert_eq!(span.tags().len(), 1);
        assert_eq!(span.metrics().len(), 1);
    }

    #[test]
    fn engine_receives_only_needed_and_present_addresses() {
        let engine = Arc::new(FakeEngine::new(vec![
            AddressKey::RequestMethod,
            AddressKey::RequestQuery,
            AddressKey::ResponseStatus,
        ]));
        let mut span = MemorySpan::web();

        ready(&engine)
            .on_span_finish(&mut span, &store())
            .expect("engine runs");

        let data = engine.last_seen();
        assert_eq!(
            data.addresses().collect::<Vec<_>>(),
            vec![AddressKey::RequestHeadersNoCookies, AddressKey::RequestMethod]
        );
        assert_eq!(data.get(AddressKey::RequestMethod), Some(&json!("GET")));
        assert_eq!(
            data.get(AddressKey::RequestHeadersNoCookies),
            Some(&json!({"user-agent": "x", "authorization": "Bearer t"}))
        );
    }

    #[test]
    fn response_headers_sent_only_when_needed() {
        let engine = Arc::new(FakeEngine::new(vec![AddressKey::ResponseHeadersNoCookies]));
        let mut span = MemorySpan::web();

        ready(&engine)
            .on_span_finish(&mut span, &store())
            .expect("engine runs");

        assert_eq!(
            engine.last_seen().get(AddressKey::ResponseHeadersNoCookies),
            Some(&json!({"content-type": "text/html", "server": "nginx"}))
        );
    }

    #[test]
    fn missing_headers_are_skipped() {
        let engine = Arc::new(FakeEngine::new(vec![]).matching("[]"));
        let mut span = MemorySpan::web();
        let empty = MemoryContextStore::new();

        ready(&engine)
            .on_span_finish(&mut span, &empty)
            .expect("engine runs");

        assert!(engine.last_seen().is_empty());
        assert_eq!(span.get_tag(tags::APPSEC_EVENT), Some("true"));
    }

    #[test]
    fn null_context_values_are_skipped() {
        let engine = Arc::new(FakeEngine::new(vec![
            AddressKey::RequestQuery,
            AddressKey::RequestMethod,
            AddressKey::ResponseHeadersNoCookies,
        ]));
        let mut store = MemoryContextStore::new();
        store.set_item("http.request.query", Value::Null);
        store.set_item("http.request.method", json!("GET"));
        store.set_item("http.response.headers", Value::Null);
        let mut span = MemorySpan::web();

        ready(&engine)
            .on_span_finish(&mut span, &store)
            .expect("engine runs");

        let data = engine.last_seen();
        assert!(!data.contains(AddressKey::RequestQuery));
        assert!(!data.contains(AddressKey::ResponseHeadersNoCookies));
        assert_eq!(data.get(AddressKey::RequestMethod), Some(&json!("GET")));
        assert!(data.iter().all(|(_, value)| !value.is_null()));
    }

    #[test]
    fn malformed_header_data_is_skipped() {
        let engine = Arc::new(FakeEngine::new(vec![]));
        let mut store = MemoryContextStore::new();
        store.set_item("http.request.headers", json!("User-Agent: x"));
        let mut span = MemorySpan::web();

        ready(&engine)
            .on_span_finish(&mut span, &store)
            .expect("engine runs");

        assert!(!engine.last_seen().contains(AddressKey::RequestHeadersNoCookies));
    }

    #[test]
    fn match_projects_headers_even_when_response_not_needed() {
        let engine = Arc::new(FakeEngine::new(vec![]).matching(r#"[{"rule":"R1"}]"#));
        let mut span = MemorySpan::web();

        ready(&engine)
            .on_span_finish(&mut span, &store())
            .expect("engine runs");

        assert!(!engine.last_seen().contains(AddressKey::ResponseHeadersNoCookies));
        assert_eq!(span.get_tag("request.headers.user-agent"), Some("x"));
        assert_eq!(span.get_tag("response.headers.content-type"), Some("text/html"));
        assert_eq!(span.get_tag("request.headers.authorization"), None);
        assert_eq!(span.get_tag("request.headers.cookie"), None);
        assert_eq!(span.get_tag("response.headers.set-cookie"), None);
        assert_eq!(span.get_tag("response.headers.server"), None);
    }

    #[test]
    fn match_writes_detection_tags() {
        let engine = Arc::new(FakeEngine::new(vec![]).matching(r#"[{"rule":"R1"}]"#));
        let mut span = MemorySpan::web();

        ready(&engine)
            .on_span_finish(&mut span, &store())
            .expect("engine runs");

        assert_eq!(span.get_tag(tags::APPSEC_EVENT), Some("true"));
        assert_eq!(
            span.get_tag(tags::APPSEC_JSON),
            Some(r#"{"triggers":[{"rule":"R1"}]}"#)
        );
        assert_eq!(span.get_tag(tags::MANUAL_KEEP), Some("true"));
        assert_eq!(span.get_metric(tags::SAMPLING_PRIORITY), Some(USER_KEEP));
        assert_eq!(span.get_tag(tags::ORIGIN), Some(APPSEC_ORIGIN));
    }

    #[test]
    fn match_keeps_existing_origin() {
        let engine = Arc::new(FakeEngine::new(vec![]).matching("[]"));
        let mut span = MemorySpan::web();
        span.set_tag(tags::ORIGIN, "synthetics");

        ready(&engine)
            .on_span_finish(&mut span, &store())
            .expect("engine runs");

        assert_eq!(span.get_tag(tags::ORIGIN), Some("synthetics"));
    }

    #[test]
    fn engine_failure_propagates_after_baseline() {
        let engine = Arc::new(FakeEngine::new(vec![]).failing("ruleset corrupted"));
        let mut span = MemorySpan::web();

        let err = ready(&engine)
            .on_span_finish(&mut span, &store())
            .unwrap_err();

        assert_eq!(err.message(), "ruleset corrupted");
        assert_eq!(span.get_metric(tags::APPSEC_ENABLED), Some(1.0));
        assert_eq!(span.get_tag(tags::APPSEC_EVENT), None);
    }

    #[test]
    fn ruleset_version_is_tagged_on_match() {
        let engine = Arc::new(
            FakeEngine::new(vec![])
                .matching("[]")
                .with_version(Ok(Some("1.3.0".to_string()))),
        );
        let mut span = MemorySpan::web();

        ready(&engine)
            .on_span_finish(&mut span, &store())
            .expect("engine runs");

        assert_eq!(span.get_tag(tags::EVENT_RULES_VERSION), Some("1.3.0"));
    }

    #[test]
    fn ruleset_version_failure_is_swallowed() {
        let engine = Arc::new(
            FakeEngine::new(vec![])
                .matching("[]")
                .with_version(Err(EngineError::new("metadata unavailable"))),
        );
        let mut span = MemorySpan::web();

        ready(&engine)
            .on_span_finish(&mut span, &store())
            .expect("metadata failure does not propagate");

        assert_eq!(span.get_tag(tags::EVENT_RULES_VERSION), None);
        assert_eq!(span.get_tag(tags::APPSEC_EVENT), Some("true"));
        assert_eq!(span.get_tag(tags::APPSEC_JSON), Some(r#"{"triggers":[]}"#));
    }

    #[test]
    fn best_effort_discards_errors() {
        assert_eq!(best_effort("value", || Ok::<_, EngineError>(3)), Some(3));
        assert_eq!(
            best_effort("value", || Err::<u8, _>(EngineError::new("nope"))),
            None
        );
    }

    #[test]
    fn from_config_rejected_rules() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        std::io::Write::write_all(&mut file, br#"{"rules": []}"#).expect("write");
        let config = ProcessorConfig::new(file.path());

        let err = AppSecProcessor::from_config(&config, |_rules| {
            Err::<FakeEngine, _>(EngineError::new("empty rule set"))
        })
        .unwrap_err();

        assert_eq!(err.kind(), ConfigErrorKind::Rejected);
    }

    #[test]
    fn from_config_passes_rules_to_compiler() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        std::io::Write::write_all(&mut file, br#"{"addresses": ["server.request.query"]}"#)
            .expect("write");
        let config = ProcessorConfig::new(file.path());

        let processor = AppSecProcessor::from_config(&config, |rules| {
            let required: Vec<AddressKey> = rules["addresses"]
                .as_array()
                .into_iter()
                .flatten()
                .filter_map(|a| a.as_str()?.parse::<AddressKey>().ok())
                .collect();
            Ok(FakeEngine::new(required))
        })
        .expect("rules compile");

        let addresses = processor.addresses().expect("ready");
        assert!(addresses.is_needed(AddressKey::RequestQuery));
        assert!(addresses.is_needed(AddressKey::RequestHeadersNoCookies));
    }

    #[test]
    fn from_config_or_disabled_on_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = ProcessorConfig::new(dir.path().join("missing.json"));

        let processor = AppSecProcessor::from_config_or_disabled(&config, |_| {
            Ok(FakeEngine::new(vec![]))
        });

        assert!(!processor.is_enabled());
    }

    #[test]
    fn debug_output_shows_state() {
        let debug = format!("{:?}", AppSecProcessor::disabled());
        assert!(debug.contains("enabled: false"));
    }

    #[test]
    fn shared_across_threads() {
        let engine = Arc::new(FakeEngine::new(vec![AddressKey::RequestMethod]).matching("[]"));
        let processor = ready(&engine);
        let store = store();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let mut span = MemorySpan::new(span_types::WEB);
                    processor
                        .on_span_finish(&mut span, &store)
                        .expect("engine runs");
                    assert_eq!(span.get_tag(tags::APPSEC_EVENT), Some("true"));
                });
            }
        });

        assert_eq!(engine.runs(), 4);
    }
}

//! Header normalization, cookie redaction and tag projection.
//!
//! Raw header collections arrive from instrumentation with arbitrary name
//! casing and may repeat a name. [`normalize`] folds them into a
//! [`HeaderMap`] keyed by lower-cased name, turning repeated names into an
//! ordered list, and unconditionally drops `cookie` and `set-cookie`.
//!
//! # Security Properties
//!
//! - A normalized [`HeaderMap`] never contains a `cookie` or `set-cookie`
//!   entry. There is no switch to turn this off.
//! - Only allow-listed headers are ever projected onto a span.

use std::fmt;

use serde_json::{Map, Value};

/// Request headers that may be copied onto a matched span.
pub const REQUEST_HEADER_ALLOW_LIST: &[&str] = &[
    "accept",
    "accept-encoding",
    "accept-language",
    "content-encoding",
    "content-language",
    "content-length",
    "content-type",
    "forwarded",
    "forwarded-for",
    "host",
    "true-client-ip",
    "user-agent",
    "via",
    "x-client-ip",
    "x-cluster-client-ip",
    "x-forwarded",
    "x-forwarded-for",
    "x-real-ip",
];

/// Response headers that may be copied onto a matched span.
pub const RESPONSE_HEADER_ALLOW_LIST: &[&str] = &[
    "content-length",
    "content-type",
    "content-encoding",
    "content-language",
];

// BREAKING CHANGE WARNING: these names MUST stay redacted unconditionally.
// Cookies carry session credentials and must never reach the engine's header
// addresses or the span's tag store.
const REDACTED_HEADERS: [&str; 2] = ["cookie", "set-cookie"];

fn is_redacted(lower_name: &str) -> bool {
    REDACTED_HEADERS.contains(&lower_name)
}

/// Value of a normalized header: one string, or every value of a repeated
/// name in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    /// The name appeared once
    Single(String),
    /// The name appeared more than once
    Multiple(Vec<String>),
}

impl HeaderValue {
    /// Returns every value as a slice, in order of appearance.
    pub fn values(&self) -> &[String] {
        match self {
            HeaderValue::Single(value) => std::slice::from_ref(value),
            HeaderValue::Multiple(values) => values,
        }
    }

    /// Renders the value as a single tag string.
    ///
    /// Lists are rendered as a compact JSON array.
    pub fn to_tag_value(&self) -> String {
        match self {
            HeaderValue::Single(value) => value.clone(),
            HeaderValue::Multiple(values) => Value::from(values.clone()).to_string(),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            HeaderValue::Single(first) => {
                let first = std::mem::take(first);
                *self = HeaderValue::Multiple(vec![first, value]);
            }
            HeaderValue::Multiple(values) => values.push(value),
        }
    }
}

impl From<&HeaderValue> for Value {
    fn from(value: &HeaderValue) -> Self {
        match value {
            HeaderValue::Single(value) => Value::String(value.clone()),
            HeaderValue::Multiple(values) => Value::from(values.clone()),
        }
    }
}

/// Headers keyed by lower-cased name, in order of first appearance.
///
/// Instances only come out of [`normalize`] (or [`normalize_value`]), so the
/// cookie invariant holds for every `HeaderMap` in the crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, HeaderValue)>,
}

impl HeaderMap {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    fn append(&mut self, name: String, value: String) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => existing.push(value),
            None => self.entries.push((name, HeaderValue::Single(value))),
        }
    }

    /// Looks up a header by its lower-cased name.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns whether a header with this lower-cased name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no header survived normalization.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` entries in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Flattens the map back into `(name, value)` pairs, one per value.
    ///
    /// Feeding the pairs to [`normalize`] rebuilds an equal map.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(name, value)| {
            value
                .values()
                .iter()
                .map(move |v| (name.as_str(), v.as_str()))
        })
    }
}

impl From<&HeaderMap> for Value {
    fn from(headers: &HeaderMap) -> Self {
        let object: Map<String, Value> = headers
            .iter()
            .map(|(name, value)| (name.to_string(), Value::from(value)))
            .collect();
        Value::Object(object)
    }
}

/// Normalizes raw `(name, value)` header pairs.
///
/// Names are lower-cased; `cookie` and `set-cookie` are dropped whatever
/// their casing; a name seen again turns its value into an ordered list.
///
/// # Examples
///
/// ```
/// use appsec_processor::headers::{normalize, HeaderValue};
///
/// let headers = normalize([
///     ("X-Forwarded-For", "10.0.0.1"),
///     ("Cookie", "session=abc"),
///     ("x-forwarded-for", "10.0.0.2"),
/// ]);
///
/// assert!(!headers.contains("cookie"));
/// assert_eq!(
///     headers.get("x-forwarded-for"),
///     Some(&HeaderValue::Multiple(vec!["10.0.0.1".into(), "10.0.0.2".into()]))
/// );
/// ```
pub fn normalize<I, K, V>(raw: I) -> HeaderMap
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let raw = raw.into_iter();
    let mut normalized = HeaderMap::with_capacity(raw.size_hint().0);
    for (name, value) in raw {
        let name = name.as_ref().to_lowercase();
        if is_redacted(&name) {
            continue;
        }
        normalized.append(name, value.into());
    }
    normalized
}

/// Normalizes a raw header collection as stored in the context store.
///
/// Accepts a JSON object (name to value) or an array of `[name, value]`
/// pairs. String values are taken as-is, numbers and booleans are
/// stringified, and arrays under one name contribute one pair per element.
/// Returns `None` when the value is neither an object nor an array.
pub fn normalize_value(raw: &Value) -> Option<HeaderMap> {
    let mut pairs: Vec<(&str, String)> = Vec::new();
    match raw {
        Value::Object(object) => {
            for (name, value) in object {
                push_scalar_values(&mut pairs, name, value);
            }
        }
        Value::Array(entries) => {
            for entry in entries {
                if let Some([Value::String(name), value]) = entry.as_array().map(Vec::as_slice) {
                    push_scalar_values(&mut pairs, name, value);
                }
            }
        }
        _ => return None,
    }
    Some(normalize(pairs))
}

fn push_scalar_values<'a>(pairs: &mut Vec<(&'a str, String)>, name: &'a str, value: &Value) {
    match value {
        Value::Array(values) => {
            for value in values {
                if let Some(value) = scalar_string(value) {
                    pairs.push((name, value));
                }
            }
        }
        value => {
            if let Some(value) = scalar_string(value) {
                pairs.push((name, value));
            }
        }
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Which side of the exchange a header map belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// Request headers
    Request,
    /// Response headers
    Response,
}

impl HeaderKind {
    /// Returns the fixed allow-list for this side.
    pub fn allow_list(self) -> &'static [&'static str] {
        match self {
            HeaderKind::Request => REQUEST_HEADER_ALLOW_LIST,
            HeaderKind::Response => RESPONSE_HEADER_ALLOW_LIST,
        }
    }
}

impl fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderKind::Request => write!(f, "request"),
            HeaderKind::Response => write!(f, "response"),
        }
    }
}

/// Returns the tag name a projected header is written under,
/// e.g. `request.headers.user-agent`.
///
/// `name` is used as given; pass a name from a [`HeaderMap`], which is
/// already lower-cased.
pub fn header_tag_name(kind: HeaderKind, name: &str) -> String {
    format!("{}.headers.{}", kind, name)
}

/// Projects allow-listed headers into `(tag name, tag value)` pairs.
///
/// Names are matched case-insensitively against `allow_list`. List values are
/// rendered as one string (see [`HeaderValue::to_tag_value`]).
///
/// # Examples
///
/// ```
/// use appsec_processor::headers::{normalize, project, HeaderKind};
///
/// let headers = normalize([("User-Agent", "curl/8.0"), ("X-Secret", "s3cr3t")]);
/// let tags = project(HeaderKind::Request, HeaderKind::Request.allow_list(), &headers);
///
/// assert_eq!(
///     tags,
///     vec![("request.headers.user-agent".to_string(), "curl/8.0".to_string())]
/// );
/// ```
pub fn project(kind: HeaderKind, allow_list: &[&str], headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter(|(name, _)| allow_list.iter().any(|allowed| allowed.eq_ignore_ascii_case(name)))
        .map(|(name, value)| (header_tag_name(kind, name), value.to_tag_value()))
        .collect()
}

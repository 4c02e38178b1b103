//! Data addresses and the registry of addresses the pipeline collects.
//!
//! An address names one piece of request or response data the detection
//! engine may ask for. Each address has two fixed spellings: the engine-side
//! address string, and the key the per-request context store files the data
//! under. Both live in one static table so the orchestration never builds
//! lookup keys by hand.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownAddress;

/// A well-known request/response data address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressKey {
    /// Parsed request body
    RequestBody,
    /// Parsed query string
    RequestQuery,
    /// Request headers with cookies removed
    RequestHeadersNoCookies,
    /// Raw request URI
    RequestUriRaw,
    /// Request method
    RequestMethod,
    /// Route path parameters
    RequestPathParams,
    /// Parsed request cookies
    RequestCookies,
    /// Response status code
    ResponseStatus,
    /// Response headers with cookies removed
    ResponseHeadersNoCookies,
}

/// (address, engine address, context key), in declaration order.
static ADDRESS_TABLE: [(AddressKey, &str, &str); 9] = [
    (
        AddressKey::RequestBody,
        "server.request.body",
        "http.request.body",
    ),
    (
        AddressKey::RequestQuery,
        "server.request.query",
        "http.request.query",
    ),
    (
        AddressKey::RequestHeadersNoCookies,
        "server.request.headers.no_cookies",
        "http.request.headers",
    ),
    (
        AddressKey::RequestUriRaw,
        "server.request.uri.raw",
        "http.request.uri",
    ),
    (
        AddressKey::RequestMethod,
        "server.request.method",
        "http.request.method",
    ),
    (
        AddressKey::RequestPathParams,
        "server.request.path_params",
        "http.request.path_params",
    ),
    (
        AddressKey::RequestCookies,
        "server.request.cookies",
        "http.request.cookies",
    ),
    (
        AddressKey::ResponseStatus,
        "server.response.status",
        "http.response.status",
    ),
    (
        AddressKey::ResponseHeadersNoCookies,
        "server.response.headers.no_cookies",
        "http.response.headers",
    ),
];

impl AddressKey {
    /// Every address, in declaration order.
    pub const ALL: [AddressKey; 9] = [
        AddressKey::RequestBody,
        AddressKey::RequestQuery,
        AddressKey::RequestHeadersNoCookies,
        AddressKey::RequestUriRaw,
        AddressKey::RequestMethod,
        AddressKey::RequestPathParams,
        AddressKey::RequestCookies,
        AddressKey::ResponseStatus,
        AddressKey::ResponseHeadersNoCookies,
    ];

    /// The address that is always collected, whatever the engine requires.
    pub const BASELINE: AddressKey = AddressKey::RequestHeadersNoCookies;

    fn entry(self) -> &'static (AddressKey, &'static str, &'static str) {
        // Table rows are in discriminant order.
        &ADDRESS_TABLE[self as usize]
    }

    /// Returns the engine-side address string, e.g. `server.request.query`.
    pub fn as_str(self) -> &'static str {
        self.entry().1
    }

    /// Returns the context store key this address is read from,
    /// e.g. `http.request.query`.
    pub fn context_key(self) -> &'static str {
        self.entry().2
    }

    /// Returns true for the addresses whose data is a header map.
    pub fn is_headers(self) -> bool {
        matches!(
            self,
            AddressKey::RequestHeadersNoCookies | AddressKey::ResponseHeadersNoCookies
        )
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for AddressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressKey {
    type Err = UnknownAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ADDRESS_TABLE
            .iter()
            .find(|(_, address, _)| *address == s)
            .map(|(key, _, _)| *key)
            .ok_or_else(|| UnknownAddress(s.to_string()))
    }
}

/// The set of addresses the pipeline must collect for each span.
///
/// Built once while the processor is constructed and read-only afterwards:
/// [`mark_needed`](Self::mark_needed) is crate-private, and a processor only
/// hands out shared references. The set is a bitset, so lookups never
/// allocate and the registry is `Copy`.
///
/// # Examples
///
/// ```
/// use appsec_processor::{AddressKey, AddressRegistry};
///
/// let registry = AddressRegistry::from_requirements([AddressKey::RequestMethod]);
///
/// assert!(registry.is_needed(AddressKey::RequestMethod));
/// // Request headers are always collected.
/// assert!(registry.is_needed(AddressKey::RequestHeadersNoCookies));
/// assert!(!registry.is_needed(AddressKey::RequestCookies));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressRegistry {
    needed: u16,
}

impl AddressRegistry {
    /// Builds a registry from the engine's requirements plus the baseline
    /// header address.
    pub fn from_requirements(required: impl IntoIterator<Item = AddressKey>) -> Self {
        let mut registry = Self::default();
        for address in required {
            registry.mark_needed(address);
        }
        registry.mark_needed(AddressKey::BASELINE);
        registry
    }

    /// Adds an address to the set. Idempotent.
    pub(crate) fn mark_needed(&mut self, address: AddressKey) {
        self.needed |= address.bit();
    }

    /// Returns whether the address must be collected.
    pub fn is_needed(&self, address: AddressKey) -> bool {
        self.needed & address.bit() != 0
    }

    /// Iterates the needed addresses in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = AddressKey> + '_ {
        AddressKey::ALL
            .into_iter()
            .filter(move |address| self.is_needed(*address))
    }

    /// Returns the number of needed addresses.
    pub fn len(&self) -> usize {
        self.needed.count_ones() as usize
    }

    /// Returns true when no address is needed.
    ///
    /// A registry built by [`from_requirements`](Self::from_requirements)
    /// is never empty.
    pub fn is_empty(&self) -> bool {
        self.needed == 0
    }
}

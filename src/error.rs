//! Construction and evaluation errors, each with a matchable kind.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::logging::Diagnostic;

/// Construction-time failure while loading or compiling the rule source.
///
/// Each variant is a distinct, matchable kind so callers can tell a missing
/// file from a malformed one from one the engine refused.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The rule file does not exist.
    #[error("could not read the rule file {path}: file does not exist")]
    RulesNotFound {
        /// Location that was tried
        path: PathBuf,
    },

    /// The rule file exists but could not be read.
    #[error("could not read the rule file {path}")]
    RulesUnreadable {
        /// Location that was tried
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The rule file was read but is not valid JSON.
    #[error("could not read the rule file {path}: invalid JSON file")]
    RulesMalformed {
        /// Location that was tried
        path: PathBuf,
        /// Parser failure
        #[source]
        source: serde_json::Error,
    },

    /// The detection engine refused the parsed rule set.
    #[error("detection engine initialization failed")]
    RulesRejected {
        /// The engine's own reason
        #[source]
        source: EngineError,
    },
}

impl ConfigError {
    /// Returns the payload-free kind of this error.
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            ConfigError::RulesNotFound { .. } => ConfigErrorKind::NotFound,
            ConfigError::RulesUnreadable { .. } => ConfigErrorKind::Unreadable,
            ConfigError::RulesMalformed { .. } => ConfigErrorKind::Malformed,
            ConfigError::RulesRejected { .. } => ConfigErrorKind::Rejected,
        }
    }

    /// Returns the stable diagnostic this error is logged under.
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            ConfigError::RulesRejected { .. } => Diagnostic::EngineInit,
            _ => Diagnostic::RulesUnreadable,
        }
    }

    /// Returns the stable diagnostic code, e.g. `DDAS-0001-03`.
    pub fn code(&self) -> &'static str {
        self.diagnostic().code()
    }
}

/// Kind of construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// Rule source missing
    NotFound,
    /// Rule source present but unreadable
    Unreadable,
    /// Rule source is not valid structured data
    Malformed,
    /// Engine rejected the rule set
    Rejected,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErrorKind::NotFound => write!(f, "not found"),
            ConfigErrorKind::Unreadable => write!(f, "unreadable"),
            ConfigErrorKind::Malformed => write!(f, "malformed"),
            ConfigErrorKind::Rejected => write!(f, "rejected"),
        }
    }
}

/// Failure reported by a detection engine.
///
/// Raised either when compiling a rule set or when evaluating a span's data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("detection engine error: {message}")]
pub struct EngineError {
    message: String,
}

impl EngineError {
    /// Creates a new engine error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An address string that does not name any [`AddressKey`](crate::AddressKey).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown address '{0}'")]
pub struct UnknownAddress(pub String);

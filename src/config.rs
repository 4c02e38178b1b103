//! Processor configuration and rule-source loading.
//!
//! The rule source location is resolved once, at the boundary:
//! 1. `DD_APPSEC_RULES`, when set and non-empty
//! 2. [`DEFAULT_RULES_PATH`] otherwise
//!
//! The core never reads the environment itself; it only sees a
//! [`ProcessorConfig`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ConfigError;

/// Environment variable naming the rule file.
pub const RULES_ENV_VAR: &str = "DD_APPSEC_RULES";

/// Rule file used when [`RULES_ENV_VAR`] is unset.
pub const DEFAULT_RULES_PATH: &str = "rules.json";

/// Configuration for building an [`AppSecProcessor`](crate::AppSecProcessor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Location of the JSON rule file
    pub rules: PathBuf,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RULES_PATH)
    }
}

impl ProcessorConfig {
    /// Creates a configuration reading rules from `rules`.
    pub fn new(rules: impl Into<PathBuf>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// Resolves the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves the configuration through an arbitrary variable lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use appsec_processor::ProcessorConfig;
    /// use std::path::Path;
    ///
    /// let config = ProcessorConfig::from_lookup(|name| {
    ///     (name == "DD_APPSEC_RULES").then(|| "/etc/appsec/rules.json".to_string())
    /// });
    /// assert_eq!(config.rules, Path::new("/etc/appsec/rules.json"));
    ///
    /// let config = ProcessorConfig::from_lookup(|_| None);
    /// assert_eq!(config.rules, Path::new("rules.json"));
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(RULES_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }

    /// Returns the rule file location.
    pub fn rules_path(&self) -> &Path {
        &self.rules
    }

    /// Reads and parses the rule file.
    ///
    /// This is the only blocking I/O in the crate; it runs once, while the
    /// processor is being built.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::RulesNotFound`] if the file does not exist
    /// - [`ConfigError::RulesUnreadable`] if it exists but cannot be read
    /// - [`ConfigError::RulesMalformed`] if it is not valid JSON
    pub fn load_rules(&self) -> Result<Value, ConfigError> {
        let path = self.rules.clone();
        let contents = fs::read_to_string(&self.rules).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::RulesNotFound { path: path.clone() }
            } else {
                ConfigError::RulesUnreadable {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::RulesMalformed { path, source })
    }
}

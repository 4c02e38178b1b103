//! Stable diagnostic codes and the structured events logged under them.
//!
//! Every event goes through `tracing` with target `appsec` and a `code`
//! field, so downstream log pipelines can match on the code rather than on
//! message text. Untrusted request data is never written to the log: the
//! engine invocation event carries address names only, and a match is
//! logged by size.

use std::fmt;

use crate::engine::DetectionData;
use crate::error::ConfigError;

/// Target used for every event emitted by this crate.
pub const LOG_TARGET: &str = "appsec";

/// A diagnostic with a stable, documented code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The rule file could not be read or parsed.
    RulesUnreadable,
    /// The detection engine refused the rule set.
    EngineInit,
    /// The detection engine is being invoked for a span.
    EngineRun,
    /// The detection engine reported a match.
    EngineMatch,
}

impl Diagnostic {
    /// Returns the stable code for this diagnostic.
    pub fn code(self) -> &'static str {
        match self {
            Diagnostic::RulesUnreadable => "DDAS-0001-03",
            Diagnostic::EngineInit => "DDAS-0005-00",
            Diagnostic::EngineRun => "DDAS-001-00",
            Diagnostic::EngineMatch => "DDAS-011-00",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub(crate) fn construction_failed(err: &ConfigError) {
    let diagnostic = err.diagnostic();
    match diagnostic {
        Diagnostic::EngineInit => tracing::warn!(
            target: LOG_TARGET,
            code = %diagnostic,
            kind = %err.kind(),
            "WAF initialization failed: {}",
            err
        ),
        _ => tracing::error!(
            target: LOG_TARGET,
            code = %diagnostic,
            kind = %err.kind(),
            "AppSec {}",
            err
        ),
    }
}

pub(crate) fn engine_run(data: &DetectionData) {
    tracing::debug!(
        target: LOG_TARGET,
        code = %Diagnostic::EngineRun,
        addresses = ?data.addresses().map(|a| a.as_str()).collect::<Vec<_>>(),
        "Executing AppSec In-App WAF"
    );
}

pub(crate) fn engine_match(result: &str) {
    // Triggers echo matched request values; only their size is logged.
    tracing::debug!(
        target: LOG_TARGET,
        code = %Diagnostic::EngineMatch,
        result_len = result.len(),
        "AppSec In-App WAF reported a match"
    );
}

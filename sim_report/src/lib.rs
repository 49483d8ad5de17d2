//! # Simulation Reports
//!
//! This crate implements structured diagnostic reporting for model
//! components.
//!
//! ## Philosophy
//!
//! Reporting is explicit and structured, not text-based or printf-style.
//! A component that wants to say something posts a [`Report`] into the
//! [`ReportLog`] it owns; tests and harnesses drain the log and assert on
//! it. There is no global reporting state.

use std::fmt;
use tlm_types::ModuleId;

/// Report severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational messages
    Info,
    /// Conditions worth noticing but not failures
    Warning,
    /// Recoverable failures
    Error,
    /// Unrecoverable failures (no transport-path report uses this)
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}

/// A structured diagnostic report
#[derive(Debug, Clone)]
pub struct Report {
    /// Report severity
    pub severity: Severity,
    /// Message type tag grouping related reports (e.g. "tlm")
    pub message_type: String,
    /// Human-readable message
    pub message: String,
    /// Source module (if known)
    pub source: Option<ModuleId>,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl Report {
    /// Creates a new report
    pub fn new(severity: Severity, message_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            message_type: message_type.into(),
            message: message.into(),
            source: None,
            fields: Vec::new(),
        }
    }

    /// Creates an error report
    pub fn error(message_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_type, message)
    }

    /// Creates an informational report
    pub fn info(message_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_type, message)
    }

    /// Sets the source module
    pub fn with_source(mut self, source: ModuleId) -> Self {
        self.source = Some(source);
        self
    }

    /// Adds a structured field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.message_type, self.message)
    }
}

/// A per-component collector of reports
///
/// Components own their log exclusively; nothing is shared or locked.
#[derive(Debug, Default)]
pub struct ReportLog {
    reports: Vec<Report>,
}

impl ReportLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a report into the log
    pub fn post(&mut self, report: Report) {
        self.reports.push(report);
    }

    /// Returns all collected reports in posting order
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Returns the number of reports at or above the given severity
    pub fn count_at_least(&self, severity: Severity) -> usize {
        self.reports.iter().filter(|r| r.severity >= severity).count()
    }

    /// Drains all collected reports, leaving the log empty
    pub fn drain(&mut self) -> Vec<Report> {
        std::mem::take(&mut self.reports)
    }

    /// Checks whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

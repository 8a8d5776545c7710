// ── Resolution error types ──
//
// Everything here is a configuration error: the operator fixes the file
// and reloads. Resolution is deterministic, so nothing is retried — the
// same input would fail the same way.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// A single field-level resolution failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("invalid node identity syntax '{raw}': expected an 'ns=' or 'nsu=' qualified identifier")]
    InvalidNodeIdentitySyntax { raw: String },

    #[error("unknown attribute id '{raw}'")]
    UnknownAttributeId { raw: String },

    #[error("invalid index range '{raw}': {reason}")]
    InvalidIndexRange { raw: String, reason: String },

    #[error("unknown filter operator '{raw}'")]
    UnknownFilterOperator { raw: String },

    #[error(
        "operand must populate exactly one of Element, Literal, Attribute or SimpleAttribute ({populated} populated)"
    )]
    AmbiguousOperand { populated: usize },

    #[error("missing required field '{field}'")]
    MissingRequiredField { field: &'static str },

    #[error("duplicate select clause key '{key}'")]
    DuplicateSelectKey { key: String },
}

/// Where inside an event entry a resolution error originated.
///
/// Indices are declaration positions in the configuration file, so the
/// operator can find the offending clause without counting by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseLocation {
    /// The event entry itself (notifier id, empty select list, ...).
    Event,
    /// A select clause, identified by index and key where one was given.
    Select { index: usize, key: Option<String> },
    /// A where-clause element, identified by index.
    Where { index: usize },
    /// An operand of a where-clause element.
    Operand { clause: usize, operand: usize },
}

impl fmt::Display for ClauseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event => write!(f, "event"),
            Self::Select {
                index,
                key: Some(key),
            } => write!(f, "select clause {index} ('{key}')"),
            Self::Select { index, key: None } => write!(f, "select clause {index}"),
            Self::Where { index } => write!(f, "where clause {index}"),
            Self::Operand { clause, operand } => {
                write!(f, "where clause {clause}, operand {operand}")
            }
        }
    }
}

/// A resolution failure tagged with the clause it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {error}")]
pub struct ClauseError {
    pub location: ClauseLocation,
    pub error: ResolveError,
}

/// Batch failure for one event entry.
///
/// Carries every failing field, in clause declaration order, so one
/// fix-reload cycle can address all of them. No partial filter is ever
/// produced alongside this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct FilterResolutionError {
    pub event_id: Uuid,
    pub event_key: Option<String>,
    pub errors: Vec<ClauseError>,
}

impl fmt::Display for FilterResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.event_key.as_deref() {
            Some(key) => write!(f, "event '{key}' ({})", self.event_id)?,
            None => write!(f, "event {}", self.event_id)?,
        }
        write!(
            f,
            " failed to resolve with {} configuration error(s)",
            self.errors.len()
        )?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

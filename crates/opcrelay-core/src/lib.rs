//! Configuration-to-domain translation core for the opcrelay publisher.
//!
//! Published-nodes configuration arrives as loosely typed JSON: node
//! identifiers, attribute names, index ranges, and filter operators are all
//! strings, and where-clause operands are records in which "exactly one
//! field is set" is only a convention. This crate turns that input into
//! typed, unambiguous values exactly once, at load time:
//!
//! - **[`NodeIdentity`]** — dual-syntax node identifier resolution
//!   (legacy `ns=` namespace-index syntax vs. `nsu=` namespace-URI
//!   syntax), keeping the configured string for display and round-trip.
//!
//! - **Vocabulary types** — [`AttributeId`], [`IndexRange`], and
//!   [`FilterOperator`], each resolved from its string form with the
//!   defaulting rules of the file format (missing attribute → `Value`,
//!   missing range → whole value).
//!
//! - **[`resolve_event_filter`]** — the filter resolution engine: select
//!   and where clauses in, a typed [`EventFilter`] out. All-or-nothing
//!   per event, with every failing field reported in one
//!   [`FilterResolutionError`] batch so a configuration can be fixed in
//!   one edit-reload cycle.
//!
//! Everything here is pure and synchronous. The resolved trees are
//! immutable and freely shareable; the subscription layer consumes them
//! without re-validating anything.

pub mod error;
pub mod model;
pub mod resolve;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::{ClauseError, ClauseLocation, FilterResolutionError, ResolveError};
pub use resolve::resolve_event_filter;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AttributeId, AttributeOperand, EventFilter, EventPublishMode, FilterOperand, FilterOperator,
    IndexRange, IndexSpan, ItemPublishMode, NodeIdentity, PublishState, SelectClause,
    SimpleAttributeOperand, WhereClauseElement,
};

// Raw input shapes, consumed by the resolution engine.
pub use resolve::{
    AttributeOperandInput, EventFilterInput, SelectClauseInput, SimpleAttributeOperandInput,
    WhereClauseElementInput, WhereClauseOperandInput,
};

// ── Resolved event filter ──
//
// The typed output of the resolution engine. Operand shape exclusivity
// is structural here: the four-optional-fields record only exists at the
// input boundary (see `resolve`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attribute::AttributeId;
use super::index_range::IndexRange;
use super::node_identity::NodeIdentity;
use super::operator::FilterOperator;
use super::publish::EventPublishMode;

/// One field to publish from matching events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectClause {
    /// Type-definition node the browse path starts from.
    pub type_id: String,
    /// Human-readable key for the published field, unique per event.
    pub key: String,
    /// Qualified-name browse path from the type to the field.
    pub browse_paths: Vec<String>,
    pub attribute_id: AttributeId,
    pub index_range: IndexRange,
}

/// AttributeOperand: a node-relative where-clause operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeOperand {
    pub node_id: NodeIdentity,
    pub alias: Option<String>,
    /// RelativePath expression from `node_id`.
    pub browse_path: String,
    pub attribute_id: AttributeId,
    pub index_range: IndexRange,
}

/// SimpleAttributeOperand: a type-relative where-clause operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleAttributeOperand {
    pub type_id: NodeIdentity,
    pub browse_paths: Vec<String>,
    pub attribute_id: AttributeId,
    pub index_range: IndexRange,
}

/// A fully resolved where-clause operand. Exactly one shape, by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperand {
    /// Index of another where-clause element whose result feeds this
    /// one. Bounds are the evaluator's concern, not checked here.
    Element(u32),
    /// Literal text. The target value type is only known once the
    /// monitored item exists, so coercion happens at evaluation time.
    Literal(String),
    Attribute(AttributeOperand),
    SimpleAttribute(SimpleAttributeOperand),
}

/// A where-clause element: operator plus ordered operands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhereClauseElement {
    pub operator: FilterOperator,
    pub operands: Vec<FilterOperand>,
}

/// A fully resolved event filter, ready for the subscription layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    pub id: Uuid,
    /// Source node with the SubscribeToEvents bit set in its
    /// EventNotifier attribute.
    pub event_notifier_id: NodeIdentity,
    pub key: Option<String>,
    pub publish_mode: Option<EventPublishMode>,
    /// At least one; enforced by the resolution engine.
    pub select_clauses: Vec<SelectClause>,
    pub where_clause: Vec<WhereClauseElement>,
}

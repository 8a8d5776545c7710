// ── Resolved domain model ──
//
// Every type in this module is the typed form of a published-nodes
// configuration concept. Construction validates once; nothing here is
// re-checked downstream.

pub mod attribute;
pub mod filter;
pub mod index_range;
pub mod node_identity;
pub mod operator;
pub mod publish;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use opcrelay_core::model::*` gives you everything.

pub use attribute::AttributeId;
pub use filter::{
    AttributeOperand, EventFilter, FilterOperand, SelectClause, SimpleAttributeOperand,
    WhereClauseElement,
};
pub use index_range::{IndexRange, IndexSpan};
pub use node_identity::NodeIdentity;
pub use operator::FilterOperator;
pub use publish::{EventPublishMode, ItemPublishMode, PublishState};

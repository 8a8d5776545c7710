// ── Configuration-to-filter resolution ──
//
// Bridges the loosely typed select/where configuration records into the
// resolved model types. Every string-encoded field is validated exactly
// once, here. Resolution of one event is all-or-nothing: the engine
// walks every clause, collects every failure tagged with its clause
// location, and either returns a complete `EventFilter` or the whole
// batch of errors — never a partial tree.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{ClauseError, ClauseLocation, FilterResolutionError, ResolveError};
use crate::model::{
    AttributeId, AttributeOperand, EventFilter, EventPublishMode, FilterOperand, FilterOperator,
    IndexRange, NodeIdentity, SelectClause, SimpleAttributeOperand, WhereClauseElement,
};

// ── Input shapes ────────────────────────────────────────────────────
// Field names follow the published-nodes file format (PascalCase).

/// Raw select clause as configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SelectClauseInput {
    pub type_id: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browse_paths: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_range: Option<String>,
}

/// Raw AttributeOperand shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeOperandInput {
    pub node_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub browse_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_range: Option<String>,
}

/// Raw SimpleAttributeOperand shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimpleAttributeOperandInput {
    pub type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browse_paths: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_range: Option<String>,
}

/// Raw where-clause operand.
///
/// The file format allows all four shapes as optional fields on one
/// record; exactly one must be populated. This record exists only at the
/// input boundary — the resolved [`FilterOperand`] makes the other three
/// shapes unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WhereClauseOperandInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<AttributeOperandInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_attribute: Option<SimpleAttributeOperandInput>,
}

/// Raw where-clause element: operator name plus ordered operands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WhereClauseElementInput {
    pub operator: String,
    #[serde(default)]
    pub operands: Vec<WhereClauseOperandInput>,
}

/// Raw event entry: identity, select clauses, where clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventFilterInput {
    pub id: Uuid,
    pub event_notifier_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(
        default,
        rename = "IotCentralEventPublishMode",
        skip_serializing_if = "Option::is_none"
    )]
    pub publish_mode: Option<EventPublishMode>,
    #[serde(default)]
    pub select_clauses: Vec<SelectClauseInput>,
    #[serde(default)]
    pub where_clause: Vec<WhereClauseElementInput>,
}

// ── Engine ──────────────────────────────────────────────────────────

/// Resolve one event entry into a typed [`EventFilter`].
///
/// All-or-nothing: on failure the returned [`FilterResolutionError`]
/// carries every failing field in clause declaration order, and no
/// partial filter exists.
pub fn resolve_event_filter(input: &EventFilterInput) -> Result<EventFilter, FilterResolutionError> {
    let mut errors: Vec<ClauseError> = Vec::new();

    // Event identity.
    let event_notifier_id = if input.event_notifier_id.trim().is_empty() {
        errors.push(ClauseError {
            location: ClauseLocation::Event,
            error: ResolveError::MissingRequiredField {
                field: "EventNotifierId",
            },
        });
        None
    } else {
        match NodeIdentity::resolve(&input.event_notifier_id) {
            Ok(id) => Some(id),
            Err(error) => {
                errors.push(ClauseError {
                    location: ClauseLocation::Event,
                    error,
                });
                None
            }
        }
    };

    if input.select_clauses.is_empty() {
        errors.push(ClauseError {
            location: ClauseLocation::Event,
            error: ResolveError::MissingRequiredField {
                field: "SelectClauses",
            },
        });
    }

    // Select clauses, in declaration order.
    let mut seen_keys = HashSet::new();
    let mut select_clauses = Vec::with_capacity(input.select_clauses.len());
    for (index, clause) in input.select_clauses.iter().enumerate() {
        match resolve_select_clause(clause, &mut seen_keys) {
            Ok(resolved) => select_clauses.push(resolved),
            Err(clause_errors) => {
                let key = clause.key.trim();
                let key = (!key.is_empty()).then(|| key.to_owned());
                errors.extend(clause_errors.into_iter().map(|error| ClauseError {
                    location: ClauseLocation::Select {
                        index,
                        key: key.clone(),
                    },
                    error,
                }));
            }
        }
    }

    // Where clauses, in declaration order.
    let mut where_clause = Vec::with_capacity(input.where_clause.len());
    for (index, element) in input.where_clause.iter().enumerate() {
        let operator = if element.operator.trim().is_empty() {
            errors.push(ClauseError {
                location: ClauseLocation::Where { index },
                error: ResolveError::MissingRequiredField { field: "Operator" },
            });
            None
        } else {
            match FilterOperator::resolve(&element.operator) {
                Ok(op) => Some(op),
                Err(error) => {
                    errors.push(ClauseError {
                        location: ClauseLocation::Where { index },
                        error,
                    });
                    None
                }
            }
        };

        let mut operands = Vec::with_capacity(element.operands.len());
        for (position, operand) in element.operands.iter().enumerate() {
            match resolve_operand(operand) {
                Ok(resolved) => operands.push(resolved),
                Err(operand_errors) => {
                    errors.extend(operand_errors.into_iter().map(|error| ClauseError {
                        location: ClauseLocation::Operand {
                            clause: index,
                            operand: position,
                        },
                        error,
                    }));
                }
            }
        }

        if let Some(operator) = operator {
            where_clause.push(WhereClauseElement { operator, operands });
        }
    }

    if errors.is_empty() {
        if let Some(event_notifier_id) = event_notifier_id {
            debug!(
                event = %input.id,
                selects = select_clauses.len(),
                wheres = where_clause.len(),
                "resolved event filter"
            );
            return Ok(EventFilter {
                id: input.id,
                event_notifier_id,
                key: input.key.clone(),
                publish_mode: input.publish_mode,
                select_clauses,
                where_clause,
            });
        }
    }

    Err(FilterResolutionError {
        event_id: input.id,
        event_key: input.key.clone(),
        errors,
    })
}

fn resolve_select_clause(
    input: &SelectClauseInput,
    seen_keys: &mut HashSet<String>,
) -> Result<SelectClause, Vec<ResolveError>> {
    let mut errors = Vec::new();

    let key = input.key.trim();
    if key.is_empty() {
        errors.push(ResolveError::MissingRequiredField { field: "Key" });
    } else if !seen_keys.insert(key.to_owned()) {
        errors.push(ResolveError::DuplicateSelectKey {
            key: key.to_owned(),
        });
    }

    if input.type_id.trim().is_empty() {
        errors.push(ResolveError::MissingRequiredField { field: "TypeId" });
    }

    let attribute_id = collect(AttributeId::resolve(input.attribute_id.as_deref()), &mut errors);
    let index_range = collect(IndexRange::resolve(input.index_range.as_deref()), &mut errors);

    match (attribute_id, index_range) {
        (Some(attribute_id), Some(index_range)) if errors.is_empty() => Ok(SelectClause {
            type_id: input.type_id.trim().to_owned(),
            key: key.to_owned(),
            browse_paths: input.browse_paths.clone().unwrap_or_default(),
            attribute_id,
            index_range,
        }),
        _ => Err(errors),
    }
}

fn resolve_operand(input: &WhereClauseOperandInput) -> Result<FilterOperand, Vec<ResolveError>> {
    match (
        &input.element,
        &input.literal,
        &input.attribute,
        &input.simple_attribute,
    ) {
        (Some(element), None, None, None) => Ok(FilterOperand::Element(*element)),
        (None, Some(literal), None, None) => Ok(FilterOperand::Literal(literal.clone())),
        (None, None, Some(attribute), None) => {
            resolve_attribute_operand(attribute).map(FilterOperand::Attribute)
        }
        (None, None, None, Some(simple)) => {
            resolve_simple_attribute_operand(simple).map(FilterOperand::SimpleAttribute)
        }
        (element, literal, attribute, simple) => {
            let populated = usize::from(element.is_some())
                + usize::from(literal.is_some())
                + usize::from(attribute.is_some())
                + usize::from(simple.is_some());
            Err(vec![ResolveError::AmbiguousOperand { populated }])
        }
    }
}

fn resolve_attribute_operand(
    input: &AttributeOperandInput,
) -> Result<AttributeOperand, Vec<ResolveError>> {
    let mut errors = Vec::new();

    let node_id = if input.node_id.trim().is_empty() {
        errors.push(ResolveError::MissingRequiredField { field: "NodeId" });
        None
    } else {
        collect(NodeIdentity::resolve(&input.node_id), &mut errors)
    };

    if input.browse_path.trim().is_empty() {
        errors.push(ResolveError::MissingRequiredField { field: "BrowsePath" });
    }

    let attribute_id = collect(AttributeId::resolve(input.attribute_id.as_deref()), &mut errors);
    let index_range = collect(IndexRange::resolve(input.index_range.as_deref()), &mut errors);

    match (node_id, attribute_id, index_range) {
        (Some(node_id), Some(attribute_id), Some(index_range)) if errors.is_empty() => {
            Ok(AttributeOperand {
                node_id,
                alias: input.alias.clone(),
                browse_path: input.browse_path.trim().to_owned(),
                attribute_id,
                index_range,
            })
        }
        _ => Err(errors),
    }
}

fn resolve_simple_attribute_operand(
    input: &SimpleAttributeOperandInput,
) -> Result<SimpleAttributeOperand, Vec<ResolveError>> {
    let mut errors = Vec::new();

    let type_id = if input.type_id.trim().is_empty() {
        errors.push(ResolveError::MissingRequiredField { field: "TypeId" });
        None
    } else {
        collect(NodeIdentity::resolve(&input.type_id), &mut errors)
    };

    let attribute_id = collect(AttributeId::resolve(input.attribute_id.as_deref()), &mut errors);
    let index_range = collect(IndexRange::resolve(input.index_range.as_deref()), &mut errors);

    match (type_id, attribute_id, index_range) {
        (Some(type_id), Some(attribute_id), Some(index_range)) if errors.is_empty() => {
            Ok(SimpleAttributeOperand {
                type_id,
                browse_paths: input.browse_paths.clone().unwrap_or_default(),
                attribute_id,
                index_range,
            })
        }
        _ => Err(errors),
    }
}

/// Push the error branch of a resolution result into `errors`, keeping
/// the success branch for later assembly.
fn collect<T>(result: Result<T, ResolveError>, errors: &mut Vec<ResolveError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

#![allow(clippy::unwrap_used)]
// End-to-end tests for the filter resolution engine, driven through the
// same JSON shapes the published-nodes file uses.

use pretty_assertions::assert_eq;
use serde_json::json;

use opcrelay_core::{
    AttributeId, ClauseLocation, EventFilterInput, FilterOperand, FilterOperator, NodeIdentity,
    ResolveError, resolve_event_filter,
};

const EVENT_ID: &str = "5c1a6c8e-0000-4000-8000-000000000001";

fn event(value: serde_json::Value) -> EventFilterInput {
    serde_json::from_value(value).unwrap()
}

// ── Success paths ───────────────────────────────────────────────────

#[test]
fn severity_filter_resolves_end_to_end() {
    let input = event(json!({
        "Id": EVENT_ID,
        "EventNotifierId": "ns=2;s=Plant/Line1",
        "Key": "AlarmEvents",
        "SelectClauses": [
            { "TypeId": "i=2041", "Key": "Severity" }
        ],
        "WhereClause": [
            {
                "Operator": "GreaterThan",
                "Operands": [
                    { "Element": 0 },
                    { "Literal": "500" }
                ]
            }
        ]
    }));

    let filter = resolve_event_filter(&input).unwrap();

    assert_eq!(
        filter.event_notifier_id,
        NodeIdentity::NumericNamespace {
            raw: "ns=2;s=Plant/Line1".into()
        }
    );
    assert_eq!(filter.key.as_deref(), Some("AlarmEvents"));

    let select = &filter.select_clauses[0];
    assert_eq!(select.type_id, "i=2041");
    assert_eq!(select.key, "Severity");
    assert_eq!(select.attribute_id, AttributeId::Value);
    assert!(select.index_range.is_full());

    let clause = &filter.where_clause[0];
    assert_eq!(clause.operator, FilterOperator::GreaterThan);
    assert_eq!(
        clause.operands,
        vec![
            FilterOperand::Element(0),
            FilterOperand::Literal("500".into())
        ]
    );
}

#[test]
fn attribute_and_simple_attribute_operands_resolve() {
    let input = event(json!({
        "Id": EVENT_ID,
        "EventNotifierId": "nsu=urn:factory:line1;s=Press",
        "SelectClauses": [
            {
                "TypeId": "nsu=urn:factory:line1;i=9001",
                "Key": "Temperature",
                "BrowsePaths": ["2:Sensors", "2:Temperature"],
                "AttributeId": "Value",
                "IndexRange": "0:3"
            }
        ],
        "WhereClause": [
            {
                "Operator": "And",
                "Operands": [
                    {
                        "Attribute": {
                            "NodeId": "ns=2;i=5001",
                            "Alias": "state",
                            "BrowsePath": "/2:State",
                            "AttributeId": "DisplayName"
                        }
                    },
                    {
                        "SimpleAttribute": {
                            "TypeId": "nsu=urn:factory:line1;i=9001",
                            "BrowsePaths": ["2:Severity"],
                            "IndexRange": "1"
                        }
                    }
                ]
            }
        ]
    }));

    let filter = resolve_event_filter(&input).unwrap();
    let operands = &filter.where_clause[0].operands;

    let FilterOperand::Attribute(attribute) = &operands[0] else {
        panic!("expected Attribute operand, got {:?}", operands[0]);
    };
    assert_eq!(attribute.node_id.as_str(), "ns=2;i=5001");
    assert_eq!(attribute.alias.as_deref(), Some("state"));
    assert_eq!(attribute.browse_path, "/2:State");
    assert_eq!(attribute.attribute_id, AttributeId::DisplayName);
    assert!(attribute.index_range.is_full());

    let FilterOperand::SimpleAttribute(simple) = &operands[1] else {
        panic!("expected SimpleAttribute operand, got {:?}", operands[1]);
    };
    assert!(simple.type_id.is_namespace_uri());
    assert_eq!(simple.browse_paths, vec!["2:Severity".to_owned()]);
    assert_eq!(simple.attribute_id, AttributeId::Value);
    assert_eq!(simple.index_range.as_str(), "1");
}

#[test]
fn where_clause_may_be_empty() {
    let input = event(json!({
        "Id": EVENT_ID,
        "EventNotifierId": "ns=2;s=Boiler",
        "SelectClauses": [
            { "TypeId": "i=2041", "Key": "Message" }
        ],
        "WhereClause": []
    }));

    let filter = resolve_event_filter(&input).unwrap();
    assert!(filter.where_clause.is_empty());
}

// ── Failure paths ───────────────────────────────────────────────────

#[test]
fn operator_typo_rejects_the_whole_event() {
    let input = event(json!({
        "Id": EVENT_ID,
        "EventNotifierId": "ns=2;s=Plant/Line1",
        "SelectClauses": [
            { "TypeId": "i=2041", "Key": "Severity" }
        ],
        "WhereClause": [
            {
                "Operator": "Betwen",
                "Operands": [ { "Element": 0 } ]
            }
        ]
    }));

    let failure = resolve_event_filter(&input).unwrap_err();
    assert_eq!(failure.errors.len(), 1);
    assert_eq!(failure.errors[0].location, ClauseLocation::Where { index: 0 });
    assert_eq!(
        failure.errors[0].error,
        ResolveError::UnknownFilterOperator {
            raw: "Betwen".into()
        }
    );
}

#[test]
fn multiply_populated_operand_is_ambiguous() {
    let input = event(json!({
        "Id": EVENT_ID,
        "EventNotifierId": "ns=2;s=Plant/Line1",
        "SelectClauses": [
            { "TypeId": "i=2041", "Key": "Severity" }
        ],
        "WhereClause": [
            {
                "Operator": "Equals",
                "Operands": [
                    {
                        "Literal": "500",
                        "Attribute": {
                            "NodeId": "ns=2;i=5001",
                            "BrowsePath": "/2:State"
                        }
                    }
                ]
            }
        ]
    }));

    let failure = resolve_event_filter(&input).unwrap_err();
    assert_eq!(
        failure.errors[0].location,
        ClauseLocation::Operand {
            clause: 0,
            operand: 0
        }
    );
    assert_eq!(
        failure.errors[0].error,
        ResolveError::AmbiguousOperand { populated: 2 }
    );
}

#[test]
fn empty_operand_is_ambiguous_too() {
    let input = event(json!({
        "Id": EVENT_ID,
        "EventNotifierId": "ns=2;s=Plant/Line1",
        "SelectClauses": [
            { "TypeId": "i=2041", "Key": "Severity" }
        ],
        "WhereClause": [
            { "Operator": "IsNull", "Operands": [ {} ] }
        ]
    }));

    let failure = resolve_event_filter(&input).unwrap_err();
    assert_eq!(
        failure.errors[0].error,
        ResolveError::AmbiguousOperand { populated: 0 }
    );
}

#[test]
fn every_failing_field_is_reported_in_clause_order() {
    let input = event(json!({
        "Id": EVENT_ID,
        "EventNotifierId": "ns=2;s=Plant/Line1",
        "Key": "Broken",
        "SelectClauses": [
            { "TypeId": "i=2041", "Key": "Severity", "AttributeId": "Valeu" },
            { "TypeId": "i=2041", "Key": "Message", "IndexRange": "4:2" }
        ],
        "WhereClause": [
            { "Operator": "Nope", "Operands": [] }
        ]
    }));

    let failure = resolve_event_filter(&input).unwrap_err();
    assert_eq!(failure.event_key.as_deref(), Some("Broken"));

    let locations: Vec<_> = failure.errors.iter().map(|e| e.location.clone()).collect();
    assert_eq!(
        locations,
        vec![
            ClauseLocation::Select {
                index: 0,
                key: Some("Severity".into())
            },
            ClauseLocation::Select {
                index: 1,
                key: Some("Message".into())
            },
            ClauseLocation::Where { index: 0 },
        ]
    );
    assert!(matches!(
        failure.errors[0].error,
        ResolveError::UnknownAttributeId { .. }
    ));
    assert!(matches!(
        failure.errors[1].error,
        ResolveError::InvalidIndexRange { .. }
    ));
    assert!(matches!(
        failure.errors[2].error,
        ResolveError::UnknownFilterOperator { .. }
    ));
}

#[test]
fn duplicate_select_keys_are_rejected() {
    let input = event(json!({
        "Id": EVENT_ID,
        "EventNotifierId": "ns=2;s=Plant/Line1",
        "SelectClauses": [
            { "TypeId": "i=2041", "Key": "Severity" },
            { "TypeId": "i=2041", "Key": "Severity" }
        ],
        "WhereClause": []
    }));

    let failure = resolve_event_filter(&input).unwrap_err();
    assert_eq!(failure.errors.len(), 1);
    assert_eq!(
        failure.errors[0].location,
        ClauseLocation::Select {
            index: 1,
            key: Some("Severity".into())
        }
    );
    assert_eq!(
        failure.errors[0].error,
        ResolveError::DuplicateSelectKey {
            key: "Severity".into()
        }
    );
}

#[test]
fn event_without_select_clauses_is_rejected() {
    let input = event(json!({
        "Id": EVENT_ID,
        "EventNotifierId": "ns=2;s=Plant/Line1",
        "SelectClauses": [],
        "WhereClause": []
    }));

    let failure = resolve_event_filter(&input).unwrap_err();
    assert_eq!(failure.errors[0].location, ClauseLocation::Event);
    assert_eq!(
        failure.errors[0].error,
        ResolveError::MissingRequiredField {
            field: "SelectClauses"
        }
    );
}

#[test]
fn unprefixed_notifier_id_is_rejected() {
    let input = event(json!({
        "Id": EVENT_ID,
        "EventNotifierId": "i=2253",
        "SelectClauses": [
            { "TypeId": "i=2041", "Key": "Severity" }
        ],
        "WhereClause": []
    }));

    let failure = resolve_event_filter(&input).unwrap_err();
    assert_eq!(failure.errors[0].location, ClauseLocation::Event);
    assert!(matches!(
        failure.errors[0].error,
        ResolveError::InvalidNodeIdentitySyntax { .. }
    ));
}

#[test]
fn operand_node_reference_errors_carry_operand_location() {
    let input = event(json!({
        "Id": EVENT_ID,
        "EventNotifierId": "ns=2;s=Plant/Line1",
        "SelectClauses": [
            { "TypeId": "i=2041", "Key": "Severity" }
        ],
        "WhereClause": [
            {
                "Operator": "OfType",
                "Operands": [
                    { "Element": 0 },
                    {
                        "Attribute": {
                            "NodeId": "BadNode",
                            "BrowsePath": "/2:State",
                            "IndexRange": "9:1"
                        }
                    }
                ]
            }
        ]
    }));

    let failure = resolve_event_filter(&input).unwrap_err();
    let at_operand: Vec<_> = failure
        .errors
        .iter()
        .filter(|e| {
            e.location
                == ClauseLocation::Operand {
                    clause: 0,
                    operand: 1,
                }
        })
        .collect();
    // Both the bad node reference and the bad index range are reported.
    assert_eq!(at_operand.len(), 2);
    assert!(matches!(
        at_operand[0].error,
        ResolveError::InvalidNodeIdentitySyntax { .. }
    ));
    assert!(matches!(
        at_operand[1].error,
        ResolveError::InvalidIndexRange { .. }
    ));
}

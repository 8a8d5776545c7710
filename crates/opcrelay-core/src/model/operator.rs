// ── Filter operators ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::ResolveError;

/// OPC UA content-filter operator.
///
/// Configuration matches case-insensitively; the canonical casing below
/// is what re-serialization emits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum FilterOperator {
    Equals,
    IsNull,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Like,
    Not,
    Between,
    InList,
    And,
    Or,
    Cast,
    InView,
    OfType,
    RelatedTo,
    BitwiseAnd,
    BitwiseOr,
}

impl FilterOperator {
    /// Resolve a configured operator name, case-insensitively.
    pub fn resolve(raw: &str) -> Result<Self, ResolveError> {
        raw.trim()
            .parse()
            .map_err(|_| ResolveError::UnknownFilterOperator {
                raw: raw.trim().to_owned(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_case_insensitive() {
        assert_eq!(
            FilterOperator::resolve("equals").unwrap(),
            FilterOperator::Equals
        );
        assert_eq!(
            FilterOperator::resolve("Equals").unwrap(),
            FilterOperator::Equals
        );
        assert_eq!(
            FilterOperator::resolve("OFTYPE").unwrap(),
            FilterOperator::OfType
        );
    }

    #[test]
    fn unknown_operator_is_rejected() {
        let err = FilterOperator::resolve("Betwen").unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownFilterOperator {
                raw: "Betwen".into()
            }
        );
    }

    #[test]
    fn display_uses_canonical_casing() {
        assert_eq!(FilterOperator::GreaterThan.to_string(), "GreaterThan");
    }
}

// ── Node attribute vocabulary ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::ResolveError;

/// The OPC UA node attribute to monitor.
///
/// Discriminants are the protocol-level attribute ids, so the
/// subscription layer can put them on the wire directly.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[repr(u32)]
pub enum AttributeId {
    NodeId = 1,
    NodeClass = 2,
    BrowseName = 3,
    DisplayName = 4,
    Description = 5,
    WriteMask = 6,
    UserWriteMask = 7,
    IsAbstract = 8,
    Symmetric = 9,
    InverseName = 10,
    ContainsNoLoops = 11,
    EventNotifier = 12,
    #[default]
    Value = 13,
    DataType = 14,
    ValueRank = 15,
    ArrayDimensions = 16,
    AccessLevel = 17,
    UserAccessLevel = 18,
    MinimumSamplingInterval = 19,
    Historizing = 20,
    Executable = 21,
    UserExecutable = 22,
    DataTypeDefinition = 23,
    RolePermissions = 24,
    UserRolePermissions = 25,
    AccessRestrictions = 26,
    AccessLevelEx = 27,
}

impl AttributeId {
    /// Resolve a configured attribute name. Missing or empty means
    /// [`AttributeId::Value`].
    ///
    /// Matching is case-sensitive: these are the fixed protocol names,
    /// not user-invented labels.
    pub fn resolve(raw: Option<&str>) -> Result<Self, ResolveError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::Value),
            Some(name) => name
                .parse()
                .map_err(|_| ResolveError::UnknownAttributeId {
                    raw: name.to_owned(),
                }),
        }
    }

    /// Protocol numeric id of this attribute.
    pub fn id(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_empty_default_to_value() {
        assert_eq!(AttributeId::resolve(None).unwrap(), AttributeId::Value);
        assert_eq!(AttributeId::resolve(Some("")).unwrap(), AttributeId::Value);
        assert_eq!(
            AttributeId::resolve(Some("   ")).unwrap(),
            AttributeId::Value
        );
    }

    #[test]
    fn known_names_resolve() {
        assert_eq!(
            AttributeId::resolve(Some("DisplayName")).unwrap(),
            AttributeId::DisplayName
        );
        assert_eq!(
            AttributeId::resolve(Some("EventNotifier")).unwrap(),
            AttributeId::EventNotifier
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        let err = AttributeId::resolve(Some("value")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownAttributeId {
                raw: "value".into()
            }
        );
    }

    #[test]
    fn protocol_ids_match_the_spec_table() {
        assert_eq!(AttributeId::NodeId.id(), 1);
        assert_eq!(AttributeId::Value.id(), 13);
        assert_eq!(AttributeId::AccessLevelEx.id(), 27);
    }
}

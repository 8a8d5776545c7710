// ── Published-nodes file entries ──
//
// Serde models for the JSON configuration file: a root-level array of
// endpoint entries, each carrying node and event lists. Field names
// follow the file format (PascalCase). These are transport shapes —
// translation into resolved publishing configs happens in `translate`.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use opcrelay_core::model::{ItemPublishMode, PublishState};
use opcrelay_core::resolve::EventFilterInput;

/// How to authenticate against the OPC UA server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpcAuthMode {
    #[default]
    Anonymous,
    UsernamePassword,
}

/// One node to monitor on an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeEntry {
    /// Node identifier, "ns=" or "nsu=" syntax.
    pub id: String,

    /// Legacy field name for the "nsu=" syntax. Takes precedence over
    /// `Id` when both are present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded_node_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opc_sampling_interval: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opc_publishing_interval: Option<i32>,

    /// Unique human-readable key for telemetry. DisplayName is not
    /// unique, and a node id may be an int or GUID nobody can read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Seconds between forced telemetry events when the value is idle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heartbeat_interval: Option<i32>,

    /// Suppress the snapshot notification right after connect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_first: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iot_central_item_publish_mode: Option<ItemPublishMode>,

    #[serde(default)]
    pub opc_publisher_publish_state: PublishState,
}

impl NodeEntry {
    /// The identifier to resolve: the legacy `ExpandedNodeId` field wins
    /// when both are present.
    pub fn effective_id(&self) -> &str {
        self.expanded_node_id.as_deref().unwrap_or(&self.id)
    }
}

/// One event subscription on an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventEntry {
    #[serde(flatten)]
    pub filter: EventFilterInput,

    #[serde(default)]
    pub opc_publisher_publish_state: PublishState,
}

/// One endpoint entry in the published-nodes file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointEntry {
    #[serde(default)]
    pub endpoint_id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_name: Option<String>,

    pub endpoint_url: Url,

    /// Secure transport, on unless explicitly disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_security: Option<bool>,

    #[serde(default)]
    pub opc_authentication_mode: OpcAuthMode,

    /// Opaque (possibly encrypted) username material; decryption happens
    /// in the credential store, not here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_auth_username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_auth_password: Option<String>,

    /// Single-node backward-compat syntax. Conflicts with `OpcNodes`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub opc_nodes: Vec<NodeEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub opc_events: Vec<EventEntry>,
}

impl EndpointEntry {
    /// Label used in diagnostics: the endpoint name when configured,
    /// otherwise the URL.
    pub fn label(&self) -> String {
        self.endpoint_name
            .clone()
            .unwrap_or_else(|| self.endpoint_url.to_string())
    }

    pub fn use_security(&self) -> bool {
        self.use_security.unwrap_or(true)
    }
}

// ── Entry-to-domain translation ──
//
// Turns one endpoint entry into per-node and per-event publishing
// configurations. Node identities and event filters resolve exactly
// once, here; the subscription layer consumes the result without
// re-validating anything.

use tracing::debug;
use url::Url;
use uuid::Uuid;

use opcrelay_core::model::{EventFilter, ItemPublishMode, NodeIdentity};
use opcrelay_core::resolve::resolve_event_filter;

use crate::ConfigError;
use crate::credentials::{EndpointCredentials, resolve_credentials};
use crate::entry::{EndpointEntry, EventEntry, NodeEntry};

/// Connection facts shared by every node and event of one endpoint.
#[derive(Debug, Clone)]
pub struct EndpointTarget {
    pub id: Uuid,
    pub name: Option<String>,
    pub url: Url,
    pub use_security: bool,
    pub credentials: EndpointCredentials,
}

/// Everything needed to create one monitored item.
#[derive(Debug, Clone)]
pub struct NodePublishingConfig {
    pub endpoint: EndpointTarget,
    pub node: NodeIdentity,
    pub key: Option<String>,
    pub display_name: Option<String>,
    pub sampling_interval_ms: Option<i32>,
    pub publishing_interval_ms: Option<i32>,
    pub heartbeat_interval_secs: Option<i32>,
    pub skip_first: Option<bool>,
    pub publish_mode: Option<ItemPublishMode>,
}

/// Everything needed to create one event subscription.
#[derive(Debug, Clone)]
pub struct EventPublishingConfig {
    pub endpoint: EndpointTarget,
    pub filter: EventFilter,
}

/// The translated form of the whole published-nodes file.
#[derive(Debug, Clone, Default)]
pub struct PublishingPlan {
    pub nodes: Vec<NodePublishingConfig>,
    pub events: Vec<EventPublishingConfig>,
}

impl PublishingPlan {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.events.is_empty()
    }

    pub fn merge(&mut self, other: PublishingPlan) {
        self.nodes.extend(other.nodes);
        self.events.extend(other.events);
    }
}

/// Resolve one endpoint entry into its publishing configs.
///
/// The legacy single-node `NodeId` field and the `OpcNodes` list are
/// mutually exclusive; an entry carrying both is a configuration
/// conflict, never silently tie-broken.
pub fn resolve_endpoint_entry(entry: &EndpointEntry) -> Result<PublishingPlan, ConfigError> {
    if entry.node_id.is_some() && !entry.opc_nodes.is_empty() {
        return Err(ConfigError::ConflictingNodeConfig {
            endpoint: entry.label(),
        });
    }

    let target = EndpointTarget {
        id: entry.endpoint_id,
        name: entry.endpoint_name.clone(),
        url: entry.endpoint_url.clone(),
        use_security: entry.use_security(),
        credentials: resolve_credentials(entry)?,
    };

    let mut plan = PublishingPlan::default();

    // Legacy single-node syntax: treat as a one-entry node list.
    if let Some(ref raw) = entry.node_id {
        let legacy = NodeEntry {
            id: raw.clone(),
            ..NodeEntry::default()
        };
        plan.nodes.push(resolve_node(entry, &target, &legacy)?);
    }

    for node in &entry.opc_nodes {
        plan.nodes.push(resolve_node(entry, &target, node)?);
    }

    for event in &entry.opc_events {
        plan.events.push(resolve_event(entry, &target, event)?);
    }

    debug!(
        endpoint = %entry.endpoint_url,
        nodes = plan.nodes.len(),
        events = plan.events.len(),
        "resolved endpoint entry"
    );
    Ok(plan)
}

fn resolve_node(
    entry: &EndpointEntry,
    target: &EndpointTarget,
    node: &NodeEntry,
) -> Result<NodePublishingConfig, ConfigError> {
    let raw = node.effective_id();
    let identity = NodeIdentity::resolve(raw).map_err(|source| ConfigError::InvalidNode {
        endpoint: entry.label(),
        id: raw.to_owned(),
        source,
    })?;

    Ok(NodePublishingConfig {
        endpoint: target.clone(),
        node: identity,
        key: node.key.clone(),
        display_name: node.display_name.clone(),
        sampling_interval_ms: node.opc_sampling_interval,
        publishing_interval_ms: node.opc_publishing_interval,
        heartbeat_interval_secs: node.heartbeat_interval,
        skip_first: node.skip_first,
        publish_mode: node.iot_central_item_publish_mode,
    })
}

fn resolve_event(
    entry: &EndpointEntry,
    target: &EndpointTarget,
    event: &EventEntry,
) -> Result<EventPublishingConfig, ConfigError> {
    let filter =
        resolve_event_filter(&event.filter).map_err(|source| ConfigError::InvalidEventFilter {
            endpoint: entry.label(),
            source,
        })?;

    Ok(EventPublishingConfig {
        endpoint: target.clone(),
        filter,
    })
}

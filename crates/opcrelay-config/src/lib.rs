//! Published-nodes configuration for the opcrelay publisher.
//!
//! This crate owns everything between the JSON file on disk and the
//! typed publishing plan the subscription layer consumes:
//!
//! - **Entry models** ([`entry`]) — serde shapes of the published-nodes
//!   file: endpoint entries with their node and event lists, credential
//!   fields, and publish-mode tags. Field names follow the file format.
//!
//! - **Loading** ([`loader`]) — read and deserialize the file, then
//!   resolve every entry into a [`PublishingPlan`].
//!
//! - **Translation** ([`translate`]) — one endpoint entry in, per-node
//!   and per-event publishing configs out, with node identities and
//!   event filters resolved through `opcrelay-core` exactly once.
//!
//! - **Credentials** ([`credentials`]) — username/password resolution
//!   for endpoints that authenticate, via environment → OS keyring →
//!   entry fields. Values stay opaque; decryption belongs to the
//!   credential store, not here.

use std::path::PathBuf;

use thiserror::Error;

use opcrelay_core::error::{FilterResolutionError, ResolveError};

pub mod credentials;
pub mod entry;
pub mod loader;
pub mod translate;

pub use credentials::{EndpointCredentials, resolve_credentials};
pub use entry::{EndpointEntry, EventEntry, NodeEntry, OpcAuthMode};
pub use loader::{default_config_path, load_published_nodes, load_publishing_plan};
pub use translate::{
    EndpointTarget, EventPublishingConfig, NodePublishingConfig, PublishingPlan,
    resolve_endpoint_entry,
};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read published-nodes file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("published-nodes file '{path}' is not valid JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "endpoint '{endpoint}' configures both the legacy NodeId field and an OpcNodes list; use one or the other"
    )]
    ConflictingNodeConfig { endpoint: String },

    #[error("no username/password credentials available for endpoint '{endpoint}'")]
    NoCredentials { endpoint: String },

    #[error("endpoint '{endpoint}': node '{id}' is invalid")]
    InvalidNode {
        endpoint: String,
        id: String,
        #[source]
        source: ResolveError,
    },

    #[error("endpoint '{endpoint}': event filter failed to resolve")]
    InvalidEventFilter {
        endpoint: String,
        #[source]
        source: FilterResolutionError,
    },
}

// ── Published-nodes file loading ──

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::info;

use crate::ConfigError;
use crate::entry::EndpointEntry;
use crate::translate::{PublishingPlan, resolve_endpoint_entry};

const CONFIG_FILE: &str = "publishednodes.json";

/// Default location of the published-nodes file, per platform
/// conventions.
pub fn default_config_path() -> PathBuf {
    ProjectDirs::from("io", "opcrelay", "opcrelay").map_or_else(
        || PathBuf::from(CONFIG_FILE),
        |dirs| dirs.config_dir().join(CONFIG_FILE),
    )
}

/// Read and deserialize the published-nodes file: a JSON array of
/// endpoint entries.
pub fn load_published_nodes(path: &Path) -> Result<Vec<EndpointEntry>, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_owned(),
        source,
    })?;
    let entries: Vec<EndpointEntry> =
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
    info!(
        path = %path.display(),
        endpoints = entries.len(),
        "loaded published-nodes file"
    );
    Ok(entries)
}

/// Load the file and resolve every entry into one publishing plan.
pub fn load_publishing_plan(path: &Path) -> Result<PublishingPlan, ConfigError> {
    let entries = load_published_nodes(path)?;

    let mut plan = PublishingPlan::default();
    for entry in &entries {
        plan.merge(resolve_endpoint_entry(entry)?);
    }

    info!(
        nodes = plan.nodes.len(),
        events = plan.events.len(),
        "resolved publishing plan"
    );
    Ok(plan)
}

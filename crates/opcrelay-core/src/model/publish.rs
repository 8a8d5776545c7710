// ── Publish-mode tags ──
//
// Pass-through markers for the IoT-Central output stage and the
// configuration differ. This crate never interprets them; it only
// guarantees they round-trip.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How IoT Central publishes a monitored data item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum ItemPublishMode {
    Telemetry,
    Property,
    Setting,
    Event,
}

/// How IoT Central publishes the select-clause fields of an event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum EventPublishMode {
    Event,
    Property,
}

/// Lifecycle marker used when entries are added or removed at runtime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum PublishState {
    #[default]
    None,
    Add,
    Published,
    Remove,
}

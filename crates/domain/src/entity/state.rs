//! Entity state — the last reported state of a snapshot entity.

use serde::{Deserialize, Serialize};

/// Last reported state of an entity.
///
/// Host platforms report states as free-form strings. The values with
/// well-known meaning get their own variant and everything else lands in
/// [`Other`](Self::Other), so a sensor reading like `"21.5"` survives a
/// round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityState {
    On,
    Off,
    #[default]
    Unknown,
    Unavailable,
    Other(String),
}

impl From<String> for EntityState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "on" => Self::On,
            "off" => Self::Off,
            "unknown" => Self::Unknown,
            "unavailable" => Self::Unavailable,
            _ => Self::Other(value),
        }
    }
}

impl From<EntityState> for String {
    fn from(value: EntityState) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for EntityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
            Self::Unknown => f.write_str("unknown"),
            Self::Unavailable => f.write_str("unavailable"),
            Self::Other(value) => f.write_str(value),
        }
    }
}

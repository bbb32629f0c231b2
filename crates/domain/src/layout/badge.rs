//! Badge — compact always-visible indicator at the top of a view.

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// A compact indicator, not embedded in any section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Badge {
    /// Shows one entity's current state.
    Entity {
        entity: EntityId,
        /// Display color name understood by the renderer, e.g. `red`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
}

impl Badge {
    /// An entity badge with an optional display color.
    #[must_use]
    pub fn entity(entity: EntityId, color: Option<&str>) -> Self {
        Self::Entity {
            entity,
            color: color.map(str::to_string),
        }
    }
}

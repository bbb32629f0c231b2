//! Floor — vertical grouping of areas.

use serde::{Deserialize, Serialize};

use crate::id::FloorId;

/// A registry entry for one floor of the installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    /// Ordering level; higher means higher up. Areas on floors without a
    /// level sort as if at the lowest level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
}

impl Floor {
    /// Create a builder for constructing a [`Floor`].
    #[must_use]
    pub fn builder(id: impl Into<FloorId>) -> FloorBuilder {
        FloorBuilder {
            floor: Self {
                id: id.into(),
                name: String::new(),
                level: None,
            },
        }
    }
}

/// Step-by-step builder for [`Floor`].
#[derive(Debug)]
pub struct FloorBuilder {
    floor: Floor,
}

impl FloorBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.floor.name = name.into();
        self
    }

    #[must_use]
    pub fn level(mut self, level: i32) -> Self {
        self.floor.level = Some(level);
        self
    }

    /// Consume the builder and return the [`Floor`].
    #[must_use]
    pub fn build(self) -> Floor {
        self.floor
    }
}

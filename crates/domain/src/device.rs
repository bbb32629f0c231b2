//! Device — a physical or virtual thing that exposes one or more entities.
//!
//! The layout core only consults a device for area inheritance: an entity
//! without a direct area assignment belongs to its owning device's area.

use serde::{Deserialize, Serialize};

use crate::id::{AreaId, DeviceId};

/// A registry entry for a physical or virtual device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    /// Area the device lives in, inherited by its entities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<AreaId>,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder(id: impl Into<DeviceId>) -> DeviceBuilder {
        DeviceBuilder {
            device: Self {
                id: id.into(),
                name: String::new(),
                area_id: None,
            },
        }
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug)]
pub struct DeviceBuilder {
    device: Device,
}

impl DeviceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.device.name = name.into();
        self
    }

    #[must_use]
    pub fn area_id(mut self, area_id: impl Into<AreaId>) -> Self {
        self.device.area_id = Some(area_id.into());
        self
    }

    /// Consume the builder and return the [`Device`].
    #[must_use]
    pub fn build(self) -> Device {
        self.device
    }
}

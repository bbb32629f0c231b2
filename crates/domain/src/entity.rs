//! Entity — one observable/controllable point of the installation.
//!
//! An entity is one snapshot entry: a light's switchable circuit, a
//! temperature sensor's reading, a cover's motor. Its coarse type tag (the
//! *domain*) lives in the identifier; the fine-grained subtype (the
//! *device class*) lives in the attribute bag, as reported by the host
//! platform.

pub mod attribute_value;
pub mod category;
pub mod state;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::id::{AreaId, DeviceId, EntityId};

pub use attribute_value::AttributeValue;
pub use category::EntityCategory;
pub use state::EntityState;

/// Attribute key holding the fine-grained subtype.
pub const ATTR_DEVICE_CLASS: &str = "device_class";

/// One snapshot entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    /// Last reported state.
    #[serde(default)]
    pub state: EntityState,
    /// Live attribute bag; arbitrary key/value reported by the host.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, AttributeValue>,
    /// Registry category; categorized entities are administrative and never
    /// appear on a dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EntityCategory>,
    /// Explicitly hidden by the user.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    /// Direct area assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<AreaId>,
    /// Owning device; its area applies when no direct assignment exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<DeviceId>,
}

impl Entity {
    /// Create a builder for constructing an [`Entity`].
    #[must_use]
    pub fn builder(id: impl Into<EntityId>) -> EntityBuilder {
        EntityBuilder {
            entity: Self {
                id: id.into(),
                state: EntityState::default(),
                attributes: HashMap::new(),
                category: None,
                hidden: false,
                area_id: None,
                device_id: None,
            },
        }
    }

    /// The coarse type tag, derived from the identifier.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.id.domain()
    }

    /// The fine-grained subtype, read from the attribute bag.
    ///
    /// Entities whose bag does not expose `device_class` have none.
    #[must_use]
    pub fn device_class(&self) -> Option<&str> {
        self.attribute(ATTR_DEVICE_CLASS)
            .and_then(AttributeValue::as_str)
    }

    /// Look up an attribute by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}

/// Step-by-step builder for [`Entity`].
#[derive(Debug)]
pub struct EntityBuilder {
    entity: Entity,
}

impl EntityBuilder {
    #[must_use]
    pub fn state(mut self, state: impl Into<EntityState>) -> Self {
        self.entity.state = state.into();
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.entity.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: EntityCategory) -> Self {
        self.entity.category = Some(category);
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.entity.hidden = true;
        self
    }

    #[must_use]
    pub fn area_id(mut self, area_id: impl Into<AreaId>) -> Self {
        self.entity.area_id = Some(area_id.into());
        self
    }

    #[must_use]
    pub fn device_id(mut self, device_id: impl Into<DeviceId>) -> Self {
        self.entity.device_id = Some(device_id.into());
        self
    }

    /// Consume the builder and return the [`Entity`].
    #[must_use]
    pub fn build(self) -> Entity {
        self.entity
    }
}

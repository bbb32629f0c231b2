//! Area — a logical grouping (room, zone) for devices and entities.

use serde::{Deserialize, Serialize};

use crate::error::{HomeboardError, ValidationError};
use crate::id::{AreaId, FloorId};

/// A logical grouping such as a room or zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    /// Icon shown on the area's heading, e.g. `mdi:sofa`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Floor the area belongs to, used for overview ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<FloorId>,
}

impl Area {
    /// Create a builder for constructing an [`Area`].
    #[must_use]
    pub fn builder(id: impl Into<AreaId>) -> AreaBuilder {
        AreaBuilder {
            area: Self {
                id: id.into(),
                name: String::new(),
                icon: None,
                floor_id: None,
            },
        }
    }

    /// Navigation path of the area's detail view.
    #[must_use]
    pub fn navigation_path(&self) -> String {
        format!("areas-{}", self.id)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeboardError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HomeboardError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Area`].
#[derive(Debug)]
pub struct AreaBuilder {
    area: Area,
}

impl AreaBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.area.name = name.into();
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.area.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn floor_id(mut self, floor_id: impl Into<FloorId>) -> Self {
        self.area.floor_id = Some(floor_id.into());
        self
    }

    /// Consume the builder, validate, and return an [`Area`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeboardError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Area, HomeboardError> {
        self.area.validate()?;
        Ok(self.area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_area_when_name_provided() {
        let area = Area::builder("living_room").name("Living Room").build().unwrap();
        assert_eq!(area.name, "Living Room");
        assert!(area.floor_id.is_none());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Area::builder("living_room").build();
        assert!(matches!(
            result,
            Err(HomeboardError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_compute_navigation_path_from_id() {
        let area = Area::builder("kitchen").name("Kitchen").build().unwrap();
        assert_eq!(area.navigation_path(), "areas-kitchen");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let area = Area::builder("bedroom")
            .name("Bedroom")
            .icon("mdi:bed")
            .floor_id("second_floor")
            .build()
            .unwrap();
        let json = serde_json::to_string(&area).unwrap();
        let parsed: Area = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, area);
    }
}

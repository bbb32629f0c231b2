//! Snapshot — the immutable input of one layout run.
//!
//! A snapshot aggregates the four host registries (entities, devices, areas,
//! floors) as captured at one point in time. Registries are keyed by id and
//! iterate in id order, so two runs over the same snapshot walk the records
//! in the same order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::device::Device;
use crate::entity::Entity;
use crate::floor::Floor;
use crate::id::{AreaId, DeviceId, EntityId, FloorId};
use crate::time::Timestamp;

/// Read-only view of the installation at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    entities: BTreeMap<EntityId, Entity>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    devices: BTreeMap<DeviceId, Device>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    areas: BTreeMap<AreaId, Area>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    floors: BTreeMap<FloorId, Floor>,
    captured_at: Timestamp,
}

impl Snapshot {
    /// Create a builder for constructing a [`Snapshot`].
    #[must_use]
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::default()
    }

    /// Iterate over all entities, in id order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Iterate over all areas, in id order.
    pub fn areas(&self) -> impl Iterator<Item = &Area> {
        self.areas.values()
    }

    /// Look up an entity by id.
    #[must_use]
    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Look up a device by id.
    #[must_use]
    pub fn device(&self, id: &DeviceId) -> Option<&Device> {
        self.devices.get(id)
    }

    /// Look up an area by id.
    #[must_use]
    pub fn area(&self, id: &AreaId) -> Option<&Area> {
        self.areas.get(id)
    }

    /// Look up a floor by id.
    #[must_use]
    pub fn floor(&self, id: &FloorId) -> Option<&Floor> {
        self.floors.get(id)
    }

    /// Resolve an entity's effective area: its direct assignment, or the
    /// area of its owning device.
    #[must_use]
    pub fn entity_area<'a>(&'a self, entity: &'a Entity) -> Option<&'a AreaId> {
        if let Some(area_id) = &entity.area_id {
            return Some(area_id);
        }
        entity
            .device_id
            .as_ref()
            .and_then(|device_id| self.device(device_id))
            .and_then(|device| device.area_id.as_ref())
    }

    /// When the snapshot was captured.
    #[must_use]
    pub fn captured_at(&self) -> Timestamp {
        self.captured_at
    }
}

/// Step-by-step builder for [`Snapshot`].
#[derive(Debug)]
pub struct SnapshotBuilder {
    snapshot: Snapshot,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self {
            snapshot: Snapshot {
                entities: BTreeMap::new(),
                devices: BTreeMap::new(),
                areas: BTreeMap::new(),
                floors: BTreeMap::new(),
                captured_at: crate::time::now(),
            },
        }
    }
}

impl SnapshotBuilder {
    #[must_use]
    pub fn entity(mut self, entity: Entity) -> Self {
        self.snapshot.entities.insert(entity.id.clone(), entity);
        self
    }

    #[must_use]
    pub fn device(mut self, device: Device) -> Self {
        self.snapshot.devices.insert(device.id.clone(), device);
        self
    }

    #[must_use]
    pub fn area(mut self, area: Area) -> Self {
        self.snapshot.areas.insert(area.id.clone(), area);
        self
    }

    #[must_use]
    pub fn floor(mut self, floor: Floor) -> Self {
        self.snapshot.floors.insert(floor.id.clone(), floor);
        self
    }

    #[must_use]
    pub fn captured_at(mut self, captured_at: Timestamp) -> Self {
        self.snapshot.captured_at = captured_at;
        self
    }

    /// Consume the builder and return the [`Snapshot`].
    #[must_use]
    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot::builder()
            .area(Area::builder("garage").name("Garage").build().unwrap())
            .device(Device::builder("dev_washer").name("Washer").area_id("garage").build())
            .entity(Entity::builder("sensor.washer_power").device_id("dev_washer").build())
            .entity(Entity::builder("light.garage").area_id("garage").build())
            .entity(Entity::builder("light.attic").build())
            .build()
    }

    #[test]
    fn should_prefer_direct_area_assignment() {
        let snapshot = snapshot();
        let entity = snapshot.entity(&"light.garage".into()).unwrap();
        assert_eq!(snapshot.entity_area(entity), Some(&"garage".into()));
    }

    #[test]
    fn should_inherit_area_from_owning_device() {
        let snapshot = snapshot();
        let entity = snapshot.entity(&"sensor.washer_power".into()).unwrap();
        assert_eq!(snapshot.entity_area(entity), Some(&"garage".into()));
    }

    #[test]
    fn should_resolve_no_area_when_unassigned() {
        let snapshot = snapshot();
        let entity = snapshot.entity(&"light.attic".into()).unwrap();
        assert_eq!(snapshot.entity_area(entity), None);
    }

    #[test]
    fn should_iterate_entities_in_id_order() {
        let snapshot = snapshot();
        let ids: Vec<&str> = snapshot.entities().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["light.attic", "light.garage", "sensor.washer_power"]);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let snapshot = snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}

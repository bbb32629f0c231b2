//! The simulated installation.
//!
//! Built fresh on every call but fully deterministic, including the capture
//! timestamp, so repeated fetches serialize byte-identically.

use chrono::DateTime;

use homeboard_domain::area::Area;
use homeboard_domain::device::Device;
use homeboard_domain::entity::{ATTR_DEVICE_CLASS, Entity, EntityCategory};
use homeboard_domain::floor::Floor;
use homeboard_domain::snapshot::Snapshot;

fn area(id: &str, name: &str, icon: &str, floor_id: Option<&str>) -> Area {
    Area {
        id: id.into(),
        name: name.to_string(),
        icon: Some(icon.to_string()),
        floor_id: floor_id.map(Into::into),
    }
}

/// Build the demo snapshot.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn demo_snapshot() -> Snapshot {
    Snapshot::builder()
        .captured_at(DateTime::UNIX_EPOCH)
        .floor(Floor::builder("ground").name("Ground floor").level(0).build())
        .floor(Floor::builder("upstairs").name("Upstairs").level(1).build())
        .area(area("living_room", "Living room", "mdi:sofa", Some("ground")))
        .area(area("kitchen", "Kitchen", "mdi:pot", Some("ground")))
        .area(area("bedroom", "Bedroom", "mdi:bed", Some("upstairs")))
        .area(area("garage", "Garage", "mdi:garage", None))
        // Living room
        .entity(
            Entity::builder("light.living_room_ceiling")
                .state("on".to_string())
                .attribute("supported_color_modes", ["brightness", "color_temp"].as_slice())
                .area_id("living_room")
                .build(),
        )
        .entity(
            Entity::builder("climate.living_room_thermostat")
                .state("heat".to_string())
                .area_id("living_room")
                .build(),
        )
        .entity(
            Entity::builder("media_player.living_room_tv")
                .state("playing".to_string())
                .area_id("living_room")
                .build(),
        )
        .entity(
            Entity::builder("lock.front_door")
                .state("locked".to_string())
                .area_id("living_room")
                .build(),
        )
        .entity(
            Entity::builder("binary_sensor.front_door")
                .state("off".to_string())
                .attribute(ATTR_DEVICE_CLASS, "door")
                .area_id("living_room")
                .build(),
        )
        .entity(
            Entity::builder("sensor.living_room_temp")
                .state("21.5".to_string())
                .attribute(ATTR_DEVICE_CLASS, "temperature")
                .area_id("living_room")
                .build(),
        )
        .entity(
            Entity::builder("vacuum.living_room_robot")
                .state("docked".to_string())
                .area_id("living_room")
                .build(),
        )
        // Kitchen
        .entity(
            Entity::builder("light.kitchen_main")
                .state("off".to_string())
                .attribute("supported_color_modes", ["brightness"].as_slice())
                .area_id("kitchen")
                .build(),
        )
        .entity(
            Entity::builder("sensor.kitchen_temp")
                .state("23.1".to_string())
                .attribute(ATTR_DEVICE_CLASS, "temperature")
                .area_id("kitchen")
                .build(),
        )
        .entity(
            Entity::builder("sensor.kitchen_humidity")
                .state("54".to_string())
                .attribute(ATTR_DEVICE_CLASS, "humidity")
                .area_id("kitchen")
                .build(),
        )
        .entity(
            Entity::builder("media_player.kitchen_speaker")
                .state("idle".to_string())
                .area_id("kitchen")
                .build(),
        )
        .entity(
            Entity::builder("sensor.kitchen_power")
                .state("340".to_string())
                .attribute(ATTR_DEVICE_CLASS, "power")
                .area_id("kitchen")
                .build(),
        )
        .entity(
            Entity::builder("sensor.kitchen_energy")
                .state("12.7".to_string())
                .attribute(ATTR_DEVICE_CLASS, "energy")
                .area_id("kitchen")
                .build(),
        )
        // Bedroom
        .entity(
            Entity::builder("light.bedroom")
                .state("off".to_string())
                .attribute("supported_color_modes", ["onoff"].as_slice())
                .area_id("bedroom")
                .build(),
        )
        .entity(
            Entity::builder("cover.bedroom_shutter")
                .state("open".to_string())
                .attribute(ATTR_DEVICE_CLASS, "shutter")
                // open|close|stop plus all three tilt bits
                .attribute("supported_features", 123_i64)
                .area_id("bedroom")
                .build(),
        )
        .entity(
            Entity::builder("binary_sensor.bedroom_window")
                .state("off".to_string())
                .attribute(ATTR_DEVICE_CLASS, "window")
                .area_id("bedroom")
                .build(),
        )
        // Garage; the washer sensor inherits its area from the device.
        .device(Device::builder("dev_washer").name("Washer").area_id("garage").build())
        .entity(Entity::builder("sensor.washer_power").device_id("dev_washer").build())
        .entity(
            Entity::builder("cover.garage_door")
                .state("closed".to_string())
                .attribute(ATTR_DEVICE_CLASS, "garage")
                .attribute("supported_features", 11_i64)
                .area_id("garage")
                .build(),
        )
        .entity(Entity::builder("light.garage").state("off".to_string()).area_id("garage").build())
        // Excluded from every layout by pool admission.
        .entity(Entity::builder("automation.goodnight").area_id("bedroom").build())
        .entity(
            Entity::builder("sensor.shutter_battery")
                .attribute(ATTR_DEVICE_CLASS, "battery")
                .category(EntityCategory::Diagnostic)
                .area_id("bedroom")
                .build(),
        )
        .entity(Entity::builder("light.bedroom_closet").hidden().area_id("bedroom").build())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeboard_domain::filter::is_displayable;

    #[test]
    fn should_be_deterministic_across_builds() {
        let first = serde_json::to_string(&demo_snapshot()).unwrap();
        let second = serde_json::to_string(&demo_snapshot()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn should_resolve_washer_area_through_its_device() {
        let snapshot = demo_snapshot();
        let entity = snapshot.entity(&"sensor.washer_power".into()).unwrap();
        assert_eq!(snapshot.entity_area(entity), Some(&"garage".into()));
    }

    #[test]
    fn should_carry_excluded_entities_for_admission_tests() {
        let snapshot = demo_snapshot();
        let excluded: Vec<&str> = snapshot
            .entities()
            .filter(|entity| !is_displayable(entity))
            .map(|entity| entity.id.as_str())
            .collect();
        assert_eq!(
            excluded,
            [
                "automation.goodnight",
                "light.bedroom_closet",
                "sensor.shutter_battery",
            ]
        );
    }

    #[test]
    fn should_roundtrip_as_the_export_format() {
        let snapshot = demo_snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}

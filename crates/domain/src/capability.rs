//! Capability detection — which control affordances an entity supports.
//!
//! The decision table is keyed by domain and consults the entity's live
//! attributes. Missing capability data means "no affordance", never an
//! error.

use crate::entity::{AttributeValue, Entity};
use crate::layout::CardFeature;

/// Attribute listing a light's supported color modes.
pub const ATTR_SUPPORTED_COLOR_MODES: &str = "supported_color_modes";
/// Attribute carrying a cover's supported-feature bitmask.
pub const ATTR_SUPPORTED_FEATURES: &str = "supported_features";

/// Color modes that allow dimming; plain on/off lights report `onoff`.
const DIMMING_COLOR_MODES: [&str; 8] = [
    "brightness",
    "color_temp",
    "hs",
    "xy",
    "rgb",
    "rgbw",
    "rgbww",
    "white",
];

const COVER_SUPPORT_OPEN: u32 = 1;
const COVER_SUPPORT_CLOSE: u32 = 2;
const COVER_SUPPORT_STOP: u32 = 8;
const COVER_SUPPORT_OPEN_TILT: u32 = 16;
const COVER_SUPPORT_CLOSE_TILT: u32 = 32;
const COVER_SUPPORT_STOP_TILT: u32 = 64;

struct CapabilityRule {
    domain: &'static str,
    feature: CardFeature,
    applies: fn(&Entity) -> bool,
}

/// Per-domain decision table, in emission order.
static CAPABILITY_TABLE: &[CapabilityRule] = &[
    CapabilityRule {
        domain: "light",
        feature: CardFeature::LightBrightness,
        applies: supports_brightness,
    },
    CapabilityRule {
        domain: "cover",
        feature: CardFeature::CoverOpenClose,
        applies: supports_open_close,
    },
    CapabilityRule {
        domain: "cover",
        feature: CardFeature::CoverTilt,
        applies: supports_tilt,
    },
];

/// Determine the affordances to attach to a tile for `entity`.
///
/// Returns zero, one, or a small fixed set of tags, in table order.
#[must_use]
pub fn card_features(entity: &Entity) -> Vec<CardFeature> {
    CAPABILITY_TABLE
        .iter()
        .filter(|rule| rule.domain == entity.domain() && (rule.applies)(entity))
        .map(|rule| rule.feature)
        .collect()
}

fn supports_brightness(entity: &Entity) -> bool {
    entity
        .attribute(ATTR_SUPPORTED_COLOR_MODES)
        .and_then(AttributeValue::as_str_list)
        .is_some_and(|modes| {
            modes
                .iter()
                .any(|mode| DIMMING_COLOR_MODES.contains(mode))
        })
}

fn feature_bits(entity: &Entity) -> u32 {
    entity
        .attribute(ATTR_SUPPORTED_FEATURES)
        .and_then(AttributeValue::as_u32)
        .unwrap_or(0)
}

fn supports_open_close(entity: &Entity) -> bool {
    feature_bits(entity) & (COVER_SUPPORT_OPEN | COVER_SUPPORT_CLOSE | COVER_SUPPORT_STOP) != 0
}

fn supports_tilt(entity: &Entity) -> bool {
    feature_bits(entity)
        & (COVER_SUPPORT_OPEN_TILT | COVER_SUPPORT_CLOSE_TILT | COVER_SUPPORT_STOP_TILT)
        != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_tag_dimmable_light_with_brightness() {
        let entity = Entity::builder("light.kitchen_main")
            .attribute(ATTR_SUPPORTED_COLOR_MODES, ["brightness"].as_slice())
            .build();
        assert_eq!(card_features(&entity), vec![CardFeature::LightBrightness]);
    }

    #[test]
    fn should_not_tag_onoff_only_light() {
        let entity = Entity::builder("light.garage")
            .attribute(ATTR_SUPPORTED_COLOR_MODES, ["onoff"].as_slice())
            .build();
        assert!(card_features(&entity).is_empty());
    }

    #[test]
    fn should_not_tag_light_missing_color_modes() {
        let entity = Entity::builder("light.garage").build();
        assert!(card_features(&entity).is_empty());
    }

    #[test]
    fn should_tag_cover_with_open_close_bits() {
        let entity = Entity::builder("cover.garage_door")
            .attribute(ATTR_SUPPORTED_FEATURES, 11_i64)
            .build();
        assert_eq!(card_features(&entity), vec![CardFeature::CoverOpenClose]);
    }

    #[test]
    fn should_tag_tilt_capable_cover_with_both_features() {
        // open|close|stop|open_tilt|close_tilt|stop_tilt
        let entity = Entity::builder("cover.bedroom_shutter")
            .attribute(ATTR_SUPPORTED_FEATURES, 123_i64)
            .build();
        assert_eq!(
            card_features(&entity),
            vec![CardFeature::CoverOpenClose, CardFeature::CoverTilt]
        );
    }

    #[test]
    fn should_tag_tilt_only_cover() {
        let entity = Entity::builder("cover.blind")
            .attribute(ATTR_SUPPORTED_FEATURES, 112_i64)
            .build();
        assert_eq!(card_features(&entity), vec![CardFeature::CoverTilt]);
    }

    #[test]
    fn should_not_tag_cover_missing_feature_bits() {
        let entity = Entity::builder("cover.curtain").build();
        assert!(card_features(&entity).is_empty());
    }

    #[test]
    fn should_not_tag_unrelated_domains() {
        let entity = Entity::builder("sensor.kitchen_temp")
            .attribute(ATTR_SUPPORTED_FEATURES, 127_i64)
            .build();
        assert!(card_features(&entity).is_empty());
    }
}

//! Bucket rule table — the ordered classification rules of the area view.
//!
//! The table is an explicit list of rule records so the product-level
//! priority order stays auditable and testable in one place. Badges resolve
//! before sections; within sections the order is lighting, climate,
//! entertainment, security, power, remaining sensors. The catch-all lives in
//! the assembler, after the table.

use homeboard_domain::capability::card_features;
use homeboard_domain::filter::EntityFilter;
use homeboard_domain::id::EntityId;
use homeboard_domain::layout::card::HeadingStyle;
use homeboard_domain::layout::{Badge, Card, Section, TapAction};
use homeboard_domain::snapshot::Snapshot;

use crate::strategy::pool::CandidatePool;

/// Cover device classes letting daylight in; grouped with climate.
const DAYLIGHT_COVER_CLASSES: [&str; 6] = ["awning", "blind", "curtain", "shade", "shutter", "window"];
/// Cover device classes people walk through; grouped with security.
const DOOR_COVER_CLASSES: [&str; 3] = ["door", "garage", "gate"];
/// Binary-sensor device classes reporting a door-like opening.
const DOOR_SENSOR_CLASSES: [&str; 3] = ["door", "garage_door", "lock"];

/// One classification rule: a predicate plus what it emits.
#[derive(Debug)]
pub enum BucketRule {
    /// Emit one badge per claimed entity.
    Badges {
        filter: EntityFilter,
        color: &'static str,
    },
    /// Emit one section with a heading and one tile per claimed entity.
    Section {
        heading: &'static str,
        icon: &'static str,
        filter: EntityFilter,
        tap_action: Option<TapAction>,
        show_entity_picture: bool,
    },
    /// Emit one section aggregating several sub-groups, each with its own
    /// sub-heading. Every sub-group's matches are claimed even when other
    /// sub-groups are empty; the section is suppressed only when all are.
    Combined { subgroups: Vec<Subgroup> },
    /// Claim matching entities without emitting anything.
    Conceal { filter: EntityFilter },
}

/// One sub-group of a [`BucketRule::Combined`] rule.
#[derive(Debug)]
pub struct Subgroup {
    pub heading: &'static str,
    pub icon: &'static str,
    pub filter: EntityFilter,
}

/// What one rule contributed to the layout.
#[derive(Debug, Default)]
pub struct RuleOutcome {
    pub badges: Vec<Badge>,
    pub section: Option<Section>,
}

impl BucketRule {
    /// Apply this rule against the current pool residue.
    ///
    /// Claimed entities leave the pool; a rule matching nothing emits
    /// nothing (no empty headings).
    pub fn apply(&self, snapshot: &Snapshot, pool: &mut CandidatePool) -> RuleOutcome {
        match self {
            Self::Badges { filter, color } => {
                let claimed = pool.take_matching(snapshot, filter);
                RuleOutcome {
                    badges: claimed
                        .into_iter()
                        .map(|id| Badge::entity(id, Some(*color)))
                        .collect(),
                    section: None,
                }
            }
            Self::Section {
                heading,
                icon,
                filter,
                tap_action,
                show_entity_picture,
            } => {
                let claimed = pool.take_matching(snapshot, filter);
                if claimed.is_empty() {
                    return RuleOutcome::default();
                }
                let mut cards = vec![Card::Heading {
                    heading: (*heading).to_string(),
                    icon: Some((*icon).to_string()),
                    heading_style: None,
                    badges: Vec::new(),
                    tap_action: tap_action.clone(),
                }];
                cards.extend(
                    claimed
                        .into_iter()
                        .map(|id| tile(snapshot, id, *show_entity_picture)),
                );
                RuleOutcome {
                    badges: Vec::new(),
                    section: Some(Section::grid(cards)),
                }
            }
            Self::Combined { subgroups } => {
                // Claim every sub-group up front so suppression of the
                // section cannot leak entities back into later rules.
                let claims: Vec<Vec<EntityId>> = subgroups
                    .iter()
                    .map(|subgroup| pool.take_matching(snapshot, &subgroup.filter))
                    .collect();
                if claims.iter().all(Vec::is_empty) {
                    return RuleOutcome::default();
                }
                let mut cards = Vec::new();
                for (subgroup, claimed) in subgroups.iter().zip(claims) {
                    if claimed.is_empty() {
                        continue;
                    }
                    cards.push(Card::Heading {
                        heading: subgroup.heading.to_string(),
                        icon: Some(subgroup.icon.to_string()),
                        heading_style: Some(HeadingStyle::Subtitle),
                        badges: Vec::new(),
                        tap_action: None,
                    });
                    cards.extend(claimed.into_iter().map(|id| tile(snapshot, id, false)));
                }
                RuleOutcome {
                    badges: Vec::new(),
                    section: Some(Section::grid(cards)),
                }
            }
            Self::Conceal { filter } => {
                let _ = pool.take_matching(snapshot, filter);
                RuleOutcome::default()
            }
        }
    }
}

fn tile(snapshot: &Snapshot, id: EntityId, show_entity_picture: bool) -> Card {
    let features = snapshot.entity(&id).map(card_features).unwrap_or_default();
    Card::Tile {
        entity: id,
        features,
        show_entity_picture,
    }
}

/// The fixed rule table, in evaluation order.
#[must_use]
pub fn rule_table() -> Vec<BucketRule> {
    vec![
        BucketRule::Badges {
            filter: EntityFilter::any().domain("sensor").device_class("temperature"),
            color: "red",
        },
        BucketRule::Badges {
            filter: EntityFilter::any().device_class("humidity"),
            color: "purple",
        },
        BucketRule::Section {
            heading: "Lights",
            icon: "mdi:lamps",
            filter: EntityFilter::any().domain("light"),
            tap_action: None,
            show_entity_picture: false,
        },
        BucketRule::Combined {
            subgroups: vec![
                Subgroup {
                    heading: "Climate",
                    icon: "mdi:thermostat",
                    filter: EntityFilter::any().domains(["climate", "humidifier"]),
                },
                Subgroup {
                    heading: "Shutters",
                    icon: "mdi:window-shutter",
                    filter: EntityFilter::any()
                        .domain("cover")
                        .device_classes(DAYLIGHT_COVER_CLASSES),
                },
                Subgroup {
                    heading: "Window sensors",
                    icon: "mdi:window-closed-variant",
                    filter: EntityFilter::any().domain("binary_sensor").device_class("window"),
                },
            ],
        },
        BucketRule::Section {
            heading: "Entertainment",
            icon: "mdi:multimedia",
            filter: EntityFilter::any().domain("media_player"),
            tap_action: None,
            show_entity_picture: true,
        },
        BucketRule::Combined {
            subgroups: vec![
                Subgroup {
                    heading: "Security",
                    icon: "mdi:shield",
                    filter: EntityFilter::any().domains(["lock", "alarm_control_panel"]),
                },
                Subgroup {
                    heading: "Doors",
                    icon: "mdi:door",
                    filter: EntityFilter::any()
                        .domain("cover")
                        .device_classes(DOOR_COVER_CLASSES),
                },
                Subgroup {
                    heading: "Door sensors",
                    icon: "mdi:door-open",
                    filter: EntityFilter::any()
                        .domain("binary_sensor")
                        .device_classes(DOOR_SENSOR_CLASSES),
                },
            ],
        },
        BucketRule::Section {
            heading: "Power",
            icon: "mdi:lightning-bolt",
            filter: EntityFilter::any().domain("sensor").device_class("power"),
            tap_action: Some(TapAction::navigate("/energy")),
            show_entity_picture: false,
        },
        // Energy totals belong to the energy panel; claim them so they do
        // not land in the sensor or catch-all buckets.
        BucketRule::Conceal {
            filter: EntityFilter::any().domain("sensor").device_class("energy"),
        },
        BucketRule::Section {
            heading: "Sensors",
            icon: "mdi:memory",
            filter: EntityFilter::any().domains(["sensor", "binary_sensor"]),
            tap_action: None,
            show_entity_picture: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeboard_domain::entity::{ATTR_DEVICE_CLASS, Entity};

    fn pool_of(snapshot: &Snapshot) -> CandidatePool {
        CandidatePool::new(snapshot.entities().map(|e| e.id.clone()).collect())
    }

    #[test]
    fn should_emit_nothing_for_empty_match() {
        let snapshot = Snapshot::builder()
            .entity(Entity::builder("sensor.temp").build())
            .build();
        let mut pool = pool_of(&snapshot);

        let rule = BucketRule::Section {
            heading: "Lights",
            icon: "mdi:lamps",
            filter: EntityFilter::any().domain("light"),
            tap_action: None,
            show_entity_picture: false,
        };
        let outcome = rule.apply(&snapshot, &mut pool);
        assert!(outcome.section.is_none());
        assert!(outcome.badges.is_empty());
    }

    #[test]
    fn should_emit_badge_per_claimed_entity() {
        let snapshot = Snapshot::builder()
            .entity(
                Entity::builder("sensor.kitchen_temp")
                    .attribute(ATTR_DEVICE_CLASS, "temperature")
                    .build(),
            )
            .build();
        let mut pool = pool_of(&snapshot);

        let rule = BucketRule::Badges {
            filter: EntityFilter::any().domain("sensor").device_class("temperature"),
            color: "red",
        };
        let outcome = rule.apply(&snapshot, &mut pool);
        assert_eq!(
            outcome.badges,
            vec![Badge::entity("sensor.kitchen_temp".into(), Some("red"))]
        );
        assert!(pool.is_empty());
    }

    #[test]
    fn should_emit_subheading_only_for_nonempty_subgroups() {
        let snapshot = Snapshot::builder()
            .entity(Entity::builder("climate.thermostat").build())
            .entity(
                Entity::builder("binary_sensor.window")
                    .attribute(ATTR_DEVICE_CLASS, "window")
                    .build(),
            )
            .build();
        let mut pool = pool_of(&snapshot);

        let rule = climate_rule();
        let section = rule.apply(&snapshot, &mut pool).section.unwrap();

        let headings: Vec<&str> = section
            .cards
            .iter()
            .filter_map(|card| match card {
                Card::Heading { heading, .. } => Some(heading.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(headings, ["Climate", "Window sensors"]);
    }

    #[test]
    fn should_claim_all_subgroups_even_when_section_suppressed() {
        // No climate/cover/window entity at all: section suppressed, pool
        // untouched apart from the (empty) claims.
        let snapshot = Snapshot::builder()
            .entity(Entity::builder("light.kitchen").build())
            .build();
        let mut pool = pool_of(&snapshot);

        let outcome = climate_rule().apply(&snapshot, &mut pool);
        assert!(outcome.section.is_none());
        assert!(!pool.is_empty());
    }

    #[test]
    fn should_attach_capability_features_to_tiles() {
        let snapshot = Snapshot::builder()
            .entity(
                Entity::builder("cover.bedroom_shutter")
                    .attribute(ATTR_DEVICE_CLASS, "shutter")
                    .attribute("supported_features", 123_i64)
                    .build(),
            )
            .build();
        let mut pool = pool_of(&snapshot);

        let section = climate_rule().apply(&snapshot, &mut pool).section.unwrap();
        let Card::Tile { features, .. } = &section.cards[1] else {
            panic!("expected a tile after the sub-heading");
        };
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn should_conceal_without_emitting() {
        let snapshot = Snapshot::builder()
            .entity(
                Entity::builder("sensor.kitchen_energy")
                    .attribute(ATTR_DEVICE_CLASS, "energy")
                    .build(),
            )
            .build();
        let mut pool = pool_of(&snapshot);

        let rule = BucketRule::Conceal {
            filter: EntityFilter::any().domain("sensor").device_class("energy"),
        };
        let outcome = rule.apply(&snapshot, &mut pool);
        assert!(outcome.section.is_none());
        assert!(outcome.badges.is_empty());
        assert!(pool.is_empty());
    }

    #[test]
    fn should_keep_badge_rules_ahead_of_sections_in_table() {
        let table = rule_table();
        let first_section = table
            .iter()
            .position(|rule| !matches!(rule, BucketRule::Badges { .. }))
            .unwrap();
        assert!(
            table[..first_section]
                .iter()
                .all(|rule| matches!(rule, BucketRule::Badges { .. }))
        );
        assert_eq!(first_section, 2);
    }

    fn climate_rule() -> BucketRule {
        BucketRule::Combined {
            subgroups: vec![
                Subgroup {
                    heading: "Climate",
                    icon: "mdi:thermostat",
                    filter: EntityFilter::any().domains(["climate", "humidifier"]),
                },
                Subgroup {
                    heading: "Shutters",
                    icon: "mdi:window-shutter",
                    filter: EntityFilter::any()
                        .domain("cover")
                        .device_classes(DAYLIGHT_COVER_CLASSES),
                },
                Subgroup {
                    heading: "Window sensors",
                    icon: "mdi:window-closed-variant",
                    filter: EntityFilter::any().domain("binary_sensor").device_class("window"),
                },
            ],
        }
    }
}

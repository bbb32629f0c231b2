//! Home view strategy — per-area summary of the whole installation.
//!
//! One grid section per area: a heading carrying the area's name, icon, and
//! at most one temperature plus one humidity badge, followed by an area
//! reference card linking to the detail view. Runs no bucket rules.

use homeboard_domain::area::Area;
use homeboard_domain::entity::Entity;
use homeboard_domain::filter::{EntityFilter, is_displayable};
use homeboard_domain::layout::card::{HeadingBadge, TapAction};
use homeboard_domain::layout::{Card, Section, View};
use homeboard_domain::snapshot::Snapshot;

/// Generate the overview layout. Never fails.
#[must_use]
pub fn generate(snapshot: &Snapshot) -> View {
    let temperature = EntityFilter::any().domain("sensor").device_class("temperature");
    let humidity = EntityFilter::any().domain("sensor").device_class("humidity");

    let sections = ordered_areas(snapshot)
        .into_iter()
        .map(|area| {
            let in_area: Vec<&Entity> = snapshot
                .entities()
                .filter(|entity| {
                    is_displayable(entity) && snapshot.entity_area(entity) == Some(&area.id)
                })
                .collect();

            let mut badges = Vec::new();
            // First admitted match per class, not all matches.
            if let Some(entity) = in_area.iter().find(|entity| temperature.matches(entity)) {
                badges.push(HeadingBadge {
                    entity: entity.id.clone(),
                });
            }
            if let Some(entity) = in_area.iter().find(|entity| humidity.matches(entity)) {
                badges.push(HeadingBadge {
                    entity: entity.id.clone(),
                });
            }

            Section::grid(vec![
                Card::Heading {
                    heading: area.name.clone(),
                    icon: area.icon.clone(),
                    heading_style: None,
                    badges,
                    tap_action: Some(TapAction::navigate(area.navigation_path())),
                },
                Card::Area {
                    area: area.id.clone(),
                    navigation_path: area.navigation_path(),
                },
            ])
        })
        .collect();

    View {
        sections,
        max_columns: Some(3),
        ..View::default()
    }
}

/// All areas, floors ordered top to bottom.
///
/// Areas without a floor (or on a floor without a level) sort as if at the
/// lowest level; ties keep id order.
pub(crate) fn ordered_areas(snapshot: &Snapshot) -> Vec<&Area> {
    let mut areas: Vec<&Area> = snapshot.areas().collect();
    areas.sort_by_key(|area| {
        let level = area
            .floor_id
            .as_ref()
            .and_then(|floor_id| snapshot.floor(floor_id))
            .and_then(|floor| floor.level);
        std::cmp::Reverse(level.unwrap_or(i32::MIN))
    });
    areas
}

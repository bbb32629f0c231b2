//! Area view strategy — full classification of one area.
//!
//! Builds the candidate pool from the snapshot, drives the bucket rule
//! table over it in fixed order, and closes with a catch-all section for
//! whatever no rule claimed.

use homeboard_domain::error::{HomeboardError, NotFoundError, ValidationError};
use homeboard_domain::filter::is_displayable;
use homeboard_domain::id::{AreaId, EntityId};
use homeboard_domain::layout::{Card, Section, View};
use homeboard_domain::snapshot::Snapshot;

use crate::strategy::pool::CandidatePool;
use crate::strategy::rules::rule_table;

/// Input of the area view entry point.
#[derive(Debug, Clone, Default)]
pub struct AreaViewConfig {
    /// The area to classify. Absence is a caller error.
    pub area: Option<AreaId>,
}

/// Generate the layout of one area.
///
/// # Errors
///
/// Returns [`HomeboardError::Validation`] when no area id is supplied and
/// [`HomeboardError::NotFound`] when the id is not in the snapshot. No
/// partial layout is returned on failure.
pub fn generate(config: &AreaViewConfig, snapshot: &Snapshot) -> Result<View, HomeboardError> {
    let area_id = config.area.as_ref().ok_or(ValidationError::MissingArea)?;
    if snapshot.area(area_id).is_none() {
        return Err(NotFoundError {
            kind: "Area",
            id: area_id.to_string(),
        }
        .into());
    }

    let mut pool = CandidatePool::new(admitted(snapshot, area_id));
    let mut view = View::default();

    for rule in rule_table() {
        let outcome = rule.apply(snapshot, &mut pool);
        view.badges.extend(outcome.badges);
        view.sections.extend(outcome.section);
    }

    let remaining = pool.into_remaining();
    if !remaining.is_empty() {
        view.sections.push(catch_all(snapshot, remaining));
    }

    Ok(view)
}

/// Pool admission: displayable entities whose effective area is the target.
fn admitted(snapshot: &Snapshot, area_id: &AreaId) -> Vec<EntityId> {
    snapshot
        .entities()
        .filter(|entity| is_displayable(entity) && snapshot.entity_area(entity) == Some(area_id))
        .map(|entity| entity.id.clone())
        .collect()
}

fn catch_all(snapshot: &Snapshot, remaining: Vec<EntityId>) -> Section {
    let mut cards = vec![Card::heading("Other", Some("mdi:file"))];
    cards.extend(remaining.into_iter().map(|id| {
        let features = snapshot
            .entity(&id)
            .map(homeboard_domain::capability::card_features)
            .unwrap_or_default();
        Card::Tile {
            entity: id,
            features,
            show_entity_picture: false,
        }
    }));
    let mut section = Section::grid(cards);
    section.column_span = Some(4);
    section
}

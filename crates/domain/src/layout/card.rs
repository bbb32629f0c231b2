//! Card — the layout's leaf rendering directive.

use serde::{Deserialize, Serialize};

use crate::id::{AreaId, EntityId};

/// A polymorphic rendering directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Card {
    /// Section or subsection title.
    Heading {
        heading: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading_style: Option<HeadingStyle>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        badges: Vec<HeadingBadge>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tap_action: Option<TapAction>,
    },
    /// Compact interactive representation of one entity.
    Tile {
        entity: EntityId,
        /// Control affordances the tile offers, e.g. a brightness slider.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        features: Vec<CardFeature>,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        show_entity_picture: bool,
    },
    /// Free-form text block.
    Markdown { content: String },
    /// Reference card linking to an area's detail view.
    Area {
        area: AreaId,
        navigation_path: String,
    },
}

impl Card {
    /// A plain tile for one entity, no affordances.
    #[must_use]
    pub fn tile(entity: EntityId) -> Self {
        Self::Tile {
            entity,
            features: Vec::new(),
            show_entity_picture: false,
        }
    }

    /// A title-level heading card.
    #[must_use]
    pub fn heading(heading: impl Into<String>, icon: Option<&str>) -> Self {
        Self::Heading {
            heading: heading.into(),
            icon: icon.map(str::to_string),
            heading_style: None,
            badges: Vec::new(),
            tap_action: None,
        }
    }
}

/// Visual weight of a heading card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingStyle {
    Title,
    Subtitle,
}

/// Compact indicator embedded in a heading card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingBadge {
    pub entity: EntityId,
}

/// What happens when the user taps a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TapAction {
    Navigate { navigation_path: String },
}

impl TapAction {
    /// Navigate to the given path.
    #[must_use]
    pub fn navigate(navigation_path: impl Into<String>) -> Self {
        Self::Navigate {
            navigation_path: navigation_path.into(),
        }
    }
}

/// Optional control affordance attached to a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CardFeature {
    /// Brightness slider for dimmable lights.
    LightBrightness,
    /// Open/close/stop buttons for covers.
    CoverOpenClose,
    /// Tilt buttons for covers with slats.
    CoverTilt,
}

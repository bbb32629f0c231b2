//! Declarative layout schema consumed by the external rendering surface.
//!
//! Homeboard only populates these values; drawing them is someone else's
//! job. Serialization follows the renderer's wire format: tagged `type`
//! fields, absent optionals omitted.

pub mod badge;
pub mod card;
pub mod dashboard;

use serde::{Deserialize, Serialize};

pub use badge::Badge;
pub use card::{Card, CardFeature, HeadingBadge, HeadingStyle, TapAction};
pub use dashboard::{Dashboard, DashboardView, StrategyRef};

/// One rendered view: always-visible badges plus ordered card sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct View {
    #[serde(rename = "type")]
    pub kind: ViewKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<Badge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_columns: Option<u8>,
}

/// View arrangement understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    #[default]
    Sections,
}

/// An ordered group of cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub cards: Vec<Card>,
    /// How many grid columns the section spans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_span: Option<u8>,
}

impl Section {
    /// A grid section over the given cards, spanning one column.
    #[must_use]
    pub fn grid(cards: Vec<Card>) -> Self {
        Self {
            kind: SectionKind::Grid,
            cards,
            column_span: None,
        }
    }
}

/// Section arrangement understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    #[default]
    Grid,
}

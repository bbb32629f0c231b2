//! Dashboard — the top-level skeleton the renderer expands view by view.
//!
//! Each view carries a strategy reference instead of inline content; the
//! renderer calls back into the matching entry point when the view is
//! opened.

use serde::{Deserialize, Serialize};

use crate::id::AreaId;

/// Top-level dashboard description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub views: Vec<DashboardView>,
}

/// One tab of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub path: String,
    /// Subviews are reachable by navigation only, not shown as tabs.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub subview: bool,
    pub strategy: StrategyRef,
}

/// Reference to the entry point that fills a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyRef {
    /// Full classification of one area.
    Area { area: AreaId },
    /// Per-area summary of the whole installation.
    Home,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_area_strategy_reference() {
        let strategy = StrategyRef::Area {
            area: "kitchen".into(),
        };
        assert_eq!(
            serde_json::to_value(&strategy).unwrap(),
            json!({"type": "area", "area": "kitchen"})
        );
    }

    #[test]
    fn should_omit_subview_flag_when_false() {
        let view = DashboardView {
            title: "Home".to_string(),
            icon: Some("mdi:home".to_string()),
            path: "home".to_string(),
            subview: false,
            strategy: StrategyRef::Home,
        };
        let value = serde_json::to_value(&view).unwrap();
        assert!(value.get("subview").is_none());
        assert_eq!(value["strategy"], json!({"type": "home"}));
    }

    #[test]
    fn should_roundtrip_dashboard_through_serde_json() {
        let dashboard = Dashboard {
            views: vec![DashboardView {
                title: "Kitchen".to_string(),
                icon: None,
                path: "areas-kitchen".to_string(),
                subview: true,
                strategy: StrategyRef::Area {
                    area: "kitchen".into(),
                },
            }],
        };
        let json = serde_json::to_string(&dashboard).unwrap();
        let parsed: Dashboard = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dashboard);
    }
}

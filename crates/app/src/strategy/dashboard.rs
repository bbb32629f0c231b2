//! Dashboard strategy — the top-level skeleton of views.
//!
//! A "Home" overview tab followed by one subview per area, ordered the same
//! way as the overview so tabs and summary sections line up.

use homeboard_domain::layout::{Dashboard, DashboardView, StrategyRef};
use homeboard_domain::snapshot::Snapshot;

use crate::strategy::home_view::ordered_areas;

/// Generate the dashboard skeleton. Never fails.
#[must_use]
pub fn generate(snapshot: &Snapshot) -> Dashboard {
    let mut views = vec![DashboardView {
        title: "Home".to_string(),
        icon: Some("mdi:home".to_string()),
        path: "home".to_string(),
        subview: false,
        strategy: StrategyRef::Home,
    }];

    views.extend(ordered_areas(snapshot).into_iter().map(|area| DashboardView {
        title: area.name.clone(),
        icon: area.icon.clone(),
        path: area.navigation_path(),
        subview: true,
        strategy: StrategyRef::Area {
            area: area.id.clone(),
        },
    }));

    Dashboard { views }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeboard_domain::area::Area;
    use homeboard_domain::floor::Floor;

    fn snapshot() -> Snapshot {
        Snapshot::builder()
            .floor(Floor::builder("upstairs").name("Upstairs").level(1).build())
            .area(Area::builder("garage").name("Garage").build().unwrap())
            .area(
                Area::builder("bedroom")
                    .name("Bedroom")
                    .icon("mdi:bed")
                    .floor_id("upstairs")
                    .build()
                    .unwrap(),
            )
            .build()
    }

    #[test]
    fn should_lead_with_home_overview_tab() {
        let dashboard = generate(&snapshot());
        let home = &dashboard.views[0];
        assert_eq!(home.title, "Home");
        assert_eq!(home.path, "home");
        assert!(!home.subview);
        assert_eq!(home.strategy, StrategyRef::Home);
    }

    #[test]
    fn should_add_one_subview_per_area_in_overview_order() {
        let dashboard = generate(&snapshot());
        let titles: Vec<&str> = dashboard.views[1..]
            .iter()
            .map(|view| view.title.as_str())
            .collect();
        assert_eq!(titles, ["Bedroom", "Garage"]);
        assert!(dashboard.views[1..].iter().all(|view| view.subview));
        assert_eq!(dashboard.views[1].path, "areas-bedroom");
        assert_eq!(
            dashboard.views[1].strategy,
            StrategyRef::Area {
                area: "bedroom".into()
            }
        );
    }

    #[test]
    fn should_produce_only_home_tab_for_empty_registry() {
        let dashboard = generate(&Snapshot::builder().build());
        assert_eq!(dashboard.views.len(), 1);
    }
}

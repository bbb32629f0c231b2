//! Layout service — fetches the snapshot and runs a strategy.
//!
//! Asynchrony is confined to the snapshot fetch; the strategies themselves
//! are pure and synchronous over the materialized snapshot.

use homeboard_domain::error::HomeboardError;
use homeboard_domain::id::AreaId;
use homeboard_domain::layout::{Dashboard, View};

use crate::ports::SnapshotSource;
use crate::strategy::area_view::{self, AreaViewConfig};
use crate::strategy::{dashboard, home_view};

/// Application service generating layouts from the current snapshot.
pub struct LayoutService<S> {
    source: S,
}

impl<S: SnapshotSource> LayoutService<S> {
    /// Create a new service backed by the given snapshot source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generate the layout of one area.
    ///
    /// # Errors
    ///
    /// Returns [`HomeboardError::Validation`] when `area` is `None`,
    /// [`HomeboardError::NotFound`] when the area is unknown, or a source
    /// error propagated from the snapshot fetch.
    #[tracing::instrument(skip(self))]
    pub async fn area_view(&self, area: Option<AreaId>) -> Result<View, HomeboardError> {
        let snapshot = self.source.snapshot().await?;
        let view = area_view::generate(&AreaViewConfig { area }, &snapshot)?;
        tracing::debug!(
            badges = view.badges.len(),
            sections = view.sections.len(),
            "generated area view"
        );
        Ok(view)
    }

    /// Generate the whole-installation overview.
    ///
    /// # Errors
    ///
    /// Returns a source error propagated from the snapshot fetch.
    #[tracing::instrument(skip(self))]
    pub async fn home_view(&self) -> Result<View, HomeboardError> {
        let snapshot = self.source.snapshot().await?;
        let view = home_view::generate(&snapshot);
        tracing::debug!(sections = view.sections.len(), "generated home view");
        Ok(view)
    }

    /// Generate the top-level dashboard skeleton.
    ///
    /// # Errors
    ///
    /// Returns a source error propagated from the snapshot fetch.
    #[tracing::instrument(skip(self))]
    pub async fn dashboard(&self) -> Result<Dashboard, HomeboardError> {
        let snapshot = self.source.snapshot().await?;
        let dashboard = dashboard::generate(&snapshot);
        tracing::debug!(views = dashboard.views.len(), "generated dashboard");
        Ok(dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeboard_domain::area::Area;
    use homeboard_domain::entity::Entity;
    use homeboard_domain::error::{SourceError, ValidationError};
    use homeboard_domain::snapshot::Snapshot;

    struct FixedSource(Snapshot);

    impl SnapshotSource for FixedSource {
        async fn snapshot(&self) -> Result<Snapshot, HomeboardError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl SnapshotSource for FailingSource {
        async fn snapshot(&self) -> Result<Snapshot, HomeboardError> {
            Err(SourceError::new("registry offline").into())
        }
    }

    fn service() -> LayoutService<FixedSource> {
        let snapshot = Snapshot::builder()
            .area(Area::builder("kitchen").name("Kitchen").build().unwrap())
            .entity(Entity::builder("light.kitchen_main").area_id("kitchen").build())
            .build();
        LayoutService::new(FixedSource(snapshot))
    }

    #[tokio::test]
    async fn should_generate_area_view_through_the_port() {
        let view = service().area_view(Some("kitchen".into())).await.unwrap();
        assert_eq!(view.sections.len(), 1);
    }

    #[tokio::test]
    async fn should_reject_missing_area_parameter() {
        let result = service().area_view(None).await;
        assert!(matches!(
            result,
            Err(HomeboardError::Validation(ValidationError::MissingArea))
        ));
    }

    #[tokio::test]
    async fn should_surface_unknown_area() {
        let result = service().area_view(Some("attic".into())).await;
        assert!(matches!(result, Err(HomeboardError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_generate_home_view_and_dashboard() {
        let svc = service();
        let view = svc.home_view().await.unwrap();
        assert_eq!(view.sections.len(), 1);

        let dashboard = svc.dashboard().await.unwrap();
        assert_eq!(dashboard.views.len(), 2);
    }

    #[tokio::test]
    async fn should_propagate_source_failures() {
        let svc = LayoutService::new(FailingSource);
        let result = svc.home_view().await;
        assert!(matches!(result, Err(HomeboardError::Source(_))));
    }
}

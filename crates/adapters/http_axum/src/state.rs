//! Shared application state for axum handlers.

use std::sync::Arc;

use homeboard_app::ports::SnapshotSource;
use homeboard_app::services::LayoutService;

/// Application state shared across all axum handlers.
///
/// Generic over the snapshot source to avoid dynamic dispatch. `Clone` is
/// implemented manually so the source itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Layout generation service.
    pub layout_service: Arc<LayoutService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            layout_service: Arc::clone(&self.layout_service),
        }
    }
}

impl<S> AppState<S>
where
    S: SnapshotSource + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(layout_service: LayoutService<S>) -> Self {
        Self {
            layout_service: Arc::new(layout_service),
        }
    }
}

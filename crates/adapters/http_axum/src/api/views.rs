//! JSON handlers for layout generation.

use axum::Json;
use axum::extract::{Path, State};

use homeboard_app::ports::SnapshotSource;
use homeboard_domain::layout::{Dashboard, View};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/dashboard`
pub async fn dashboard<S>(State(state): State<AppState<S>>) -> Result<Json<Dashboard>, ApiError>
where
    S: SnapshotSource + Send + Sync + 'static,
{
    let dashboard = state.layout_service.dashboard().await?;
    Ok(Json(dashboard))
}

/// `GET /api/views/home`
pub async fn home<S>(State(state): State<AppState<S>>) -> Result<Json<View>, ApiError>
where
    S: SnapshotSource + Send + Sync + 'static,
{
    let view = state.layout_service.home_view().await?;
    Ok(Json(view))
}

/// `GET /api/views/areas/{area}`
pub async fn area<S>(
    State(state): State<AppState<S>>,
    Path(area): Path<String>,
) -> Result<Json<View>, ApiError>
where
    S: SnapshotSource + Send + Sync + 'static,
{
    let view = state.layout_service.area_view(Some(area.into())).await?;
    Ok(Json(view))
}

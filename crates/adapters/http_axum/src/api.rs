//! JSON API route table.

use axum::Router;
use axum::routing::get;

use homeboard_app::ports::SnapshotSource;

use crate::state::AppState;

pub mod views;

/// Routes mounted under `/api`.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: SnapshotSource + Send + Sync + 'static,
{
    Router::new()
        .route("/dashboard", get(views::dashboard))
        .route("/views/home", get(views::home))
        .route("/views/areas/{area}", get(views::area))
}

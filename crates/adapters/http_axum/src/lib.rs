//! # homeboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **layout JSON API** the rendering surface polls:
//!   `/api/dashboard`, `/api/views/home`, `/api/views/areas/{area}`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `homeboard-app` (port trait and service) and `homeboard-domain`
//! (layout types in responses). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

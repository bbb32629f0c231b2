//! Application services — the driving entry points.

pub mod layout_service;

pub use layout_service::LayoutService;

//! Layout strategies — pure functions from a snapshot to layout values.
//!
//! Each strategy owns its working state for the duration of one call and
//! returns a plain value; nothing persists between invocations, so separate
//! calls (including concurrent ones for different areas) are independent.

pub mod area_view;
pub mod dashboard;
pub mod home_view;
pub mod pool;
pub mod rules;

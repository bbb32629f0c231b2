//! # homeboard-app
//!
//! Application layer — layout strategies and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** adapters must implement (driven/outbound):
//!   - `SnapshotSource` — produce the current installation snapshot
//! - Provide the **strategy engine** (pure, synchronous):
//!   - `strategy::area_view` — full classification of one area
//!   - `strategy::home_view` — per-area summary of the whole installation
//!   - `strategy::dashboard` — top-level dashboard skeleton
//!   - `strategy::rules` — the ordered bucket rule table the area view drives
//!   - `strategy::pool` — shrinking candidate pool and set difference
//! - Provide the **driving port** as a use-case struct:
//!   - `LayoutService` — fetches the snapshot and runs a strategy
//!
//! ## Dependency rule
//! Depends on `homeboard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod strategy;

//! # homeboard-domain
//!
//! Pure domain model for the homeboard layout generator.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Snapshot** (read-only view of an installation: entities,
//!   devices, areas, floors) handed over by the host platform
//! - Define **Entities** (one observable/controllable point each, with state,
//!   attribute bag, category, and area/device linkage)
//! - Define the **layout schema** (views, sections, cards, badges) consumed
//!   by the external rendering surface
//! - Provide the **predicate library** (domain/device-class filters, hidden
//!   domains) and the **capability detector** (which control affordances a
//!   placed entity supports)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod area;
pub mod capability;
pub mod device;
pub mod entity;
pub mod filter;
pub mod floor;
pub mod layout;
pub mod snapshot;

//! # homeboard-adapter-virtual
//!
//! Virtual/demo snapshot source that provides a simulated home installation
//! for testing and demonstration purposes.
//!
//! ## Simulated installation
//!
//! Two floors (ground, upstairs) plus an unfloored garage. The entity set
//! covers every bucket of the classification rules: dimmable and plain
//! lights, a thermostat, a tilt-capable shutter, window and door sensors, a
//! lock, media players, power and energy sensors, and a vacuum for the
//! catch-all. It also carries entities the pool must exclude (hidden flag,
//! diagnostic category, hidden domain) and one entity whose area is
//! inherited from its owning device.
//!
//! ## Dependency rule
//!
//! Depends on `homeboard-app` (port trait) and `homeboard-domain` only.

mod demo;

use homeboard_app::ports::SnapshotSource;
use homeboard_domain::error::HomeboardError;
use homeboard_domain::snapshot::Snapshot;

pub use demo::demo_snapshot;

/// Snapshot source serving the simulated installation.
#[derive(Debug, Default)]
pub struct DemoSnapshotSource;

impl SnapshotSource for DemoSnapshotSource {
    async fn snapshot(&self) -> Result<Snapshot, HomeboardError> {
        Ok(demo_snapshot())
    }
}

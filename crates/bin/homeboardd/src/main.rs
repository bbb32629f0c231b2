//! # homeboardd — homeboard daemon
//!
//! Composition root that wires the snapshot source and the HTTP adapter
//! together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Select the snapshot source (file export or bundled demo home)
//! - Construct the layout service, injecting the source via the port trait
//! - Build the axum router, bind to a TCP port, and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use homeboard_adapter_file::FileSnapshotSource;
use homeboard_adapter_http_axum::state::AppState;
use homeboard_adapter_virtual::DemoSnapshotSource;
use homeboard_app::ports::SnapshotSource;
use homeboard_app::services::LayoutService;
use homeboard_domain::error::HomeboardError;
use homeboard_domain::snapshot::Snapshot;

use config::Config;

/// The snapshot source selected at startup.
enum Source {
    File(FileSnapshotSource),
    Demo(DemoSnapshotSource),
}

impl SnapshotSource for Source {
    async fn snapshot(&self) -> Result<Snapshot, HomeboardError> {
        match self {
            Self::File(source) => source.snapshot().await,
            Self::Demo(source) => source.snapshot().await,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    let source = match &config.snapshot.file {
        Some(path) => {
            tracing::info!(path = %path.display(), "serving snapshot export");
            Source::File(FileSnapshotSource::new(path))
        }
        None => {
            tracing::info!("no snapshot file configured, serving the demo home");
            Source::Demo(DemoSnapshotSource)
        }
    };

    let state = AppState::new(LayoutService::new(source));
    let app = homeboard_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!("homeboardd listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

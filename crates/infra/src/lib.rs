mod config;
mod repos;
mod system;

pub use chrono_tz::Tz;
pub use config::Config;
pub use repos::{load_snapshot, ISnapshotRepo, InMemorySnapshotRepo, Repos};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;
use travel_desk_domain::Snapshot;

#[derive(Clone)]
pub struct TravelDeskContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl TravelDeskContext {
    /// Context with an empty in-memory snapshot and the real clock
    pub fn create_inmemory() -> Self {
        Self::create_inmemory_with(Snapshot::default())
    }

    pub fn create_inmemory_with(snapshot: Snapshot) -> Self {
        Self {
            repos: Repos::create_inmemory_with(snapshot),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<TravelDeskContext> {
    let config = Config::new();
    let snapshot = match &config.snapshot_path {
        Some(path) => {
            let snapshot = load_snapshot(path).await?;
            info!(
                clients = snapshot.clients.len(),
                bookings = snapshot.bookings.len(),
                visas = snapshot.visas.len(),
                passports = snapshot.passports.len(),
                policies = snapshot.policies.len(),
                "Seeded snapshot from {}",
                path
            );
            snapshot
        }
        None => Snapshot::default(),
    };
    Ok(TravelDeskContext {
        repos: Repos::create_inmemory_with(snapshot),
        config,
        sys: Arc::new(RealSys {}),
    })
}

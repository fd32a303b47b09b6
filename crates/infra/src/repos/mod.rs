mod snapshot;

pub use snapshot::{load_snapshot, ISnapshotRepo, InMemorySnapshotRepo};
use std::sync::Arc;
use travel_desk_domain::Snapshot;

#[derive(Clone)]
pub struct Repos {
    pub snapshots: Arc<dyn ISnapshotRepo>,
}

impl Repos {
    pub fn create_inmemory_with(snapshot: Snapshot) -> Self {
        Self {
            snapshots: Arc::new(InMemorySnapshotRepo::with_snapshot(snapshot)),
        }
    }
}

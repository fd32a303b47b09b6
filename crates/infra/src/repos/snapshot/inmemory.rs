use super::ISnapshotRepo;
use std::sync::{Arc, RwLock};
use travel_desk_domain::Snapshot;

pub struct InMemorySnapshotRepo {
    snapshot: RwLock<Arc<Snapshot>>,
}

impl InMemorySnapshotRepo {
    pub fn new() -> Self {
        Self::with_snapshot(Snapshot::default())
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }
}

impl Default for InMemorySnapshotRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ISnapshotRepo for InMemorySnapshotRepo {
    async fn get(&self) -> Arc<Snapshot> {
        // Replacing is a single assignment so a poisoned lock still holds a whole snapshot
        let snapshot = match self.snapshot.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(&snapshot)
    }

    async fn replace(&self, snapshot: Snapshot) -> anyhow::Result<()> {
        let mut current = match self.snapshot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *current = Arc::new(snapshot);
        Ok(())
    }
}

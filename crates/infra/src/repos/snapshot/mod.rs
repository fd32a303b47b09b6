mod inmemory;

use anyhow::Context;
pub use inmemory::InMemorySnapshotRepo;
use std::{path::Path, sync::Arc};
use travel_desk_domain::Snapshot;

/// Holds the snapshot every derivation reads from.
///
/// Readers get a shared handle to an immutable snapshot. A replacement never
/// touches snapshots already handed out.
#[async_trait::async_trait]
pub trait ISnapshotRepo: Send + Sync {
    async fn get(&self) -> Arc<Snapshot>;
    async fn replace(&self, snapshot: Snapshot) -> anyhow::Result<()>;
}

/// Reads a snapshot from a JSON file
pub async fn load_snapshot(path: impl AsRef<Path>) -> anyhow::Result<Snapshot> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Unable to read snapshot file: {}", path.display()))?;
    let snapshot = serde_json::from_str(&content)
        .with_context(|| format!("Snapshot file: {} is not valid", path.display()))?;
    Ok(snapshot)
}

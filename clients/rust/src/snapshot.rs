use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use travel_desk_api_structs::set_snapshot;
use travel_desk_domain::Snapshot;

#[derive(Clone)]
pub struct SnapshotClient {
    base: Arc<BaseClient>,
}

impl SnapshotClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Replaces every collection the server derives from
    pub async fn replace(&self, snapshot: &Snapshot) -> APIResponse<set_snapshot::APIResponse> {
        self.base.put(snapshot, "snapshot".into(), StatusCode::OK).await
    }
}

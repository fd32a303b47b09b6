use crate::{
    base::{APIResponse, BaseClient},
    shared::date_query,
};
use chrono::NaiveDate;
use reqwest::StatusCode;
use std::sync::Arc;
use travel_desk_api_structs::get_dashboard;

#[derive(Clone)]
pub struct DashboardClient {
    base: Arc<BaseClient>,
}

impl DashboardClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self, date: Option<NaiveDate>) -> APIResponse<get_dashboard::APIResponse> {
        self.base
            .get(format!("dashboard{}", date_query(date)), StatusCode::OK)
            .await
    }
}

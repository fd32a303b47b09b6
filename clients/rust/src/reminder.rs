use crate::{
    base::{APIResponse, BaseClient},
    shared::date_query,
};
use chrono::NaiveDate;
use reqwest::StatusCode;
use std::sync::Arc;
use travel_desk_api_structs::get_reminders;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Reminders due within a year of `date`, or of today when left out
    pub async fn get(&self, date: Option<NaiveDate>) -> APIResponse<get_reminders::APIResponse> {
        self.base
            .get(format!("reminders{}", date_query(date)), StatusCode::OK)
            .await
    }
}

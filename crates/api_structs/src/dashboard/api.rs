use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use travel_desk_domain::DashboardSummary;

pub mod get_dashboard {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        /// Reference date, `YYYY-MM-DD`. Defaults to today.
        pub date: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reference_date: NaiveDate,
        pub summary: DashboardSummary,
    }
}

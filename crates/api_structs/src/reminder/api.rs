use crate::dtos::{ReminderCategoryDTO, ReminderDTO};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod get_reminders {
    use super::*;
    use travel_desk_domain::{group_by_kind, Reminder};

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
        pub reminders: Vec<ReminderDTO>,
        pub categories: Vec<ReminderCategoryDTO>,
    }

    impl APIResponse {
        pub fn new(reference_date: NaiveDate, reminders: Vec<Reminder>) -> Self {
            let categories = group_by_kind(&reminders)
                .into_iter()
                .map(ReminderCategoryDTO::new)
                .collect();
            Self {
                reference_date,
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
                categories,
            }
        }
    }
}

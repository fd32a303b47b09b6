use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use travel_desk_domain::{Reminder, ReminderGroup, ReminderKind, ID};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub subject_id: ID,
    pub client_id: Option<ID>,
    pub name: String,
    pub days_left: Option<i64>,
    pub date: NaiveDate,
    pub pnr: Option<String>,
    pub message: String,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        let message = reminder.message();
        Self {
            kind: reminder.kind,
            subject_id: reminder.subject_id,
            client_id: reminder.client_id,
            name: reminder.name,
            days_left: reminder.days_left,
            date: reminder.date,
            pnr: reminder.pnr,
            message,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderCategoryDTO {
    pub category: ReminderKind,
    pub reminders: Vec<ReminderDTO>,
}

impl ReminderCategoryDTO {
    pub fn new(group: ReminderGroup) -> Self {
        Self {
            category: group.kind,
            reminders: group.reminders.into_iter().map(ReminderDTO::new).collect(),
        }
    }
}

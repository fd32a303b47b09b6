use crate::{
    date::parse_optional_date,
    shared::entity::{Entity, ID},
    view::{FieldValue, Tabular, ViewKind},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Passport {
    pub id: ID,
    pub created_at: Option<String>,
    pub client_id: Option<ID>,
    pub passport_number: Option<String>,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
}

impl Passport {
    pub fn new(client_id: ID, expiry_date: &str) -> Self {
        Self {
            client_id: Some(client_id),
            expiry_date: Some(expiry_date.into()),
            ..Default::default()
        }
    }

    pub fn expiry(&self) -> Option<NaiveDate> {
        parse_optional_date(self.expiry_date.as_deref())
    }
}

impl Entity for Passport {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Tabular for Passport {
    const KIND: ViewKind = ViewKind::Passports;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "created_at",
        "client_id",
        "passport_number",
        "issue_date",
        "expiry_date",
    ];

    fn value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::id(&self.id),
            "created_at" => FieldValue::text(&self.created_at),
            "client_id" => FieldValue::optional_id(&self.client_id),
            "passport_number" => FieldValue::text(&self.passport_number),
            "issue_date" => FieldValue::text(&self.issue_date),
            "expiry_date" => FieldValue::text(&self.expiry_date),
            _ => return None,
        };
        Some(value)
    }
}

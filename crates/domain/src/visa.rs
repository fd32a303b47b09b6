use crate::{
    date::parse_optional_date,
    shared::entity::{Entity, ID},
    view::{FieldValue, Tabular, ViewKind},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Visa {
    pub id: ID,
    pub created_at: Option<String>,
    pub client_id: Option<ID>,
    pub country: Option<String>,
    pub visa_type: Option<String>,
    pub visa_number: Option<String>,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub notes: Option<String>,
}

impl Visa {
    pub fn expiry(&self) -> Option<NaiveDate> {
        parse_optional_date(self.expiry_date.as_deref())
    }
}

impl Entity for Visa {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Tabular for Visa {
    const KIND: ViewKind = ViewKind::Visas;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "created_at",
        "client_id",
        "country",
        "visa_type",
        "visa_number",
        "issue_date",
        "expiry_date",
        "notes",
    ];

    fn value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::id(&self.id),
            "created_at" => FieldValue::text(&self.created_at),
            "client_id" => FieldValue::optional_id(&self.client_id),
            "country" => FieldValue::text(&self.country),
            "visa_type" => FieldValue::text(&self.visa_type),
            "visa_number" => FieldValue::text(&self.visa_number),
            "issue_date" => FieldValue::text(&self.issue_date),
            "expiry_date" => FieldValue::text(&self.expiry_date),
            "notes" => FieldValue::text(&self.notes),
            _ => return None,
        };
        Some(value)
    }
}

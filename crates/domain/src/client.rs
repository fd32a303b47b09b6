use crate::{
    shared::entity::{Entity, ID},
    view::{FieldValue, Tabular, ViewKind},
};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_CLIENT_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    pub id: ID,
    pub created_at: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(alias = "email_id")]
    pub email: Option<String>,
    #[serde(alias = "mobile_no")]
    pub mobile: Option<String>,
    #[serde(alias = "dob")]
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
}

impl Client {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Default::default()
        }
    }

    /// "first last", skipping whichever part is missing
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Short label used next to related records
    pub fn display_name(&self) -> String {
        match self.first_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNKNOWN_CLIENT_NAME.to_string(),
        }
    }
}

impl Entity for Client {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Tabular for Client {
    const KIND: ViewKind = ViewKind::Clients;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "created_at",
        "first_name",
        "last_name",
        "email",
        "mobile",
        "date_of_birth",
        "nationality",
    ];

    fn value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::id(&self.id),
            "created_at" => FieldValue::text(&self.created_at),
            "first_name" => FieldValue::text(&self.first_name),
            "last_name" => FieldValue::text(&self.last_name),
            "email" => FieldValue::text(&self.email),
            "mobile" => FieldValue::text(&self.mobile),
            "date_of_birth" => FieldValue::text(&self.date_of_birth),
            "nationality" => FieldValue::text(&self.nationality),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_backend_column_names() {
        let client: Client = serde_json::from_str(
            r#"{
                "id": "c1",
                "first_name": "Ann",
                "last_name": "Lee",
                "email_id": "ann@example.com",
                "mobile_no": "+4712345678",
                "dob": "1990-06-15",
                "nationality": null
            }"#,
        )
        .unwrap();
        assert_eq!(client.id.as_str(), "c1");
        assert_eq!(client.email.as_deref(), Some("ann@example.com"));
        assert_eq!(client.mobile.as_deref(), Some("+4712345678"));
        assert_eq!(client.date_of_birth.as_deref(), Some("1990-06-15"));
        assert_eq!(client.nationality, None);
        assert_eq!(client.created_at, None);
    }

    #[test]
    fn it_builds_names_with_placeholders() {
        let client = Client::new("Ann", "Lee");
        assert_eq!(client.full_name(), "Ann Lee");
        assert_eq!(client.display_name(), "Ann");

        let nameless = Client::default();
        assert_eq!(nameless.full_name(), "");
        assert_eq!(nameless.display_name(), UNKNOWN_CLIENT_NAME);
    }

    #[test]
    fn every_display_column_is_a_field() {
        for column in ViewKind::Clients.columns() {
            assert!(Client::default().value(column).is_some(), "{}", column);
        }
    }
}

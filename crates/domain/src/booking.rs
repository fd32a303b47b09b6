use crate::{
    date::{days_between, parse_optional_date},
    shared::entity::{Entity, ID},
    view::{FieldValue, Tabular, ViewKind},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Booking {
    pub id: ID,
    pub created_at: Option<String>,
    pub client_id: Option<ID>,
    pub pnr: Option<String>,
    pub booking_type: Option<String>,
    pub destination: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub departure_date: Option<String>,
    pub vendor: Option<String>,
    pub reference: Option<String>,
    pub confirmation_no: Option<String>,
    pub seat_reference: Option<String>,
    pub meal_preference: Option<String>,
    pub special_requirement: Option<String>,
}

impl Booking {
    pub fn new(client_id: ID) -> Self {
        Self {
            client_id: Some(client_id),
            ..Default::default()
        }
    }

    pub fn check_in_date(&self) -> Option<NaiveDate> {
        parse_optional_date(self.check_in.as_deref())
    }

    pub fn departure(&self) -> Option<NaiveDate> {
        parse_optional_date(self.departure_date.as_deref())
    }

    /// Days from check-in to check-out, `None` unless both dates parse
    pub fn duration_days(&self) -> Option<i64> {
        let check_in = self.check_in_date()?;
        let check_out = parse_optional_date(self.check_out.as_deref())?;
        Some(days_between(check_in, check_out))
    }
}

impl Entity for Booking {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Tabular for Booking {
    const KIND: ViewKind = ViewKind::Bookings;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "created_at",
        "client_id",
        "pnr",
        "booking_type",
        "destination",
        "check_in",
        "check_out",
        "departure_date",
        "vendor",
        "reference",
        "confirmation_no",
        "seat_reference",
        "meal_preference",
        "special_requirement",
    ];

    fn value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::id(&self.id),
            "created_at" => FieldValue::text(&self.created_at),
            "client_id" => FieldValue::optional_id(&self.client_id),
            "pnr" => FieldValue::text(&self.pnr),
            "booking_type" => FieldValue::text(&self.booking_type),
            "destination" => FieldValue::text(&self.destination),
            "check_in" => FieldValue::text(&self.check_in),
            "check_out" => FieldValue::text(&self.check_out),
            "departure_date" => FieldValue::text(&self.departure_date),
            "vendor" => FieldValue::text(&self.vendor),
            "reference" => FieldValue::text(&self.reference),
            "confirmation_no" => FieldValue::text(&self.confirmation_no),
            "seat_reference" => FieldValue::text(&self.seat_reference),
            "meal_preference" => FieldValue::text(&self.meal_preference),
            "special_requirement" => FieldValue::text(&self.special_requirement),
            _ => return None,
        };
        Some(value)
    }
}

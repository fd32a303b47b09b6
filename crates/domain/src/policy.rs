use crate::{
    date::parse_optional_date,
    shared::entity::{Entity, ID},
    view::{FieldValue, Tabular, ViewKind},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Travel insurance policy, optionally tied to a booking
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub id: ID,
    pub created_at: Option<String>,
    pub client_id: Option<ID>,
    pub booking_id: Option<ID>,
    pub policy_number: Option<String>,
    pub insurer: Option<String>,
    pub sum_insured: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub premium_amount: Option<f64>,
}

impl Policy {
    /// Policies expire at the end of their cover
    pub fn expiry(&self) -> Option<NaiveDate> {
        parse_optional_date(self.end_date.as_deref())
    }
}

impl Entity for Policy {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Tabular for Policy {
    const KIND: ViewKind = ViewKind::Policies;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "created_at",
        "client_id",
        "booking_id",
        "policy_number",
        "insurer",
        "sum_insured",
        "start_date",
        "end_date",
        "premium_amount",
    ];

    fn value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::id(&self.id),
            "created_at" => FieldValue::text(&self.created_at),
            "client_id" => FieldValue::optional_id(&self.client_id),
            "booking_id" => FieldValue::optional_id(&self.booking_id),
            "policy_number" => FieldValue::text(&self.policy_number),
            "insurer" => FieldValue::text(&self.insurer),
            "sum_insured" => FieldValue::number(self.sum_insured),
            "start_date" => FieldValue::text(&self.start_date),
            "end_date" => FieldValue::text(&self.end_date),
            "premium_amount" => FieldValue::number(self.premium_amount),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::view::{project, SortSpec, ViewQuery};

    #[test]
    fn it_sorts_amounts_as_numbers() {
        let policies = [900.0, 10000.0, 50.0]
            .iter()
            .map(|amount| Policy {
                sum_insured: Some(*amount),
                ..Default::default()
            })
            .collect::<Vec<_>>();
        let sorted = project(
            &policies,
            &ViewQuery::default().with_sort(SortSpec::ascending("sum_insured")),
        )
        .unwrap();
        let amounts = sorted
            .iter()
            .map(|p| p.sum_insured.unwrap())
            .collect::<Vec<_>>();
        assert_eq!(amounts, vec![50.0, 900.0, 10000.0]);
    }

    #[test]
    fn it_reads_numeric_amounts() {
        let policy: Policy = serde_json::from_str(
            r#"{"id": "p1", "booking_id": "b1", "sum_insured": 50000, "premium_amount": 120.5, "end_date": "2024-12-31"}"#,
        )
        .unwrap();
        assert_eq!(policy.sum_insured, Some(50000.0));
        assert_eq!(policy.premium_amount, Some(120.5));
        assert_eq!(
            policy.expiry(),
            chrono::NaiveDate::from_ymd_opt(2024, 12, 31)
        );
    }
}

use crate::shared::entity::ID;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::BTreeMap, fmt::Display, str::FromStr};
use thiserror::Error;

/// The tables a user can browse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKind {
    Clients,
    Bookings,
    Visas,
    Passports,
    Policies,
}

impl ViewKind {
    pub const ALL: [ViewKind; 5] = [
        ViewKind::Clients,
        ViewKind::Bookings,
        ViewKind::Visas,
        ViewKind::Passports,
        ViewKind::Policies,
    ];

    /// Columns shown in the table for this view, in display order.
    /// Identifier and timestamp fields are never displayed.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Clients => &[
                "first_name",
                "last_name",
                "email",
                "mobile",
                "date_of_birth",
                "nationality",
            ],
            Self::Bookings => &[
                "client_id",
                "pnr",
                "booking_type",
                "destination",
                "check_in",
                "check_out",
                "vendor",
                "reference",
                "confirmation_no",
                "seat_reference",
                "meal_preference",
                "special_requirement",
            ],
            Self::Visas => &[
                "client_id",
                "country",
                "visa_type",
                "visa_number",
                "issue_date",
                "expiry_date",
                "notes",
            ],
            Self::Passports => &["client_id", "passport_number", "issue_date", "expiry_date"],
            Self::Policies => &[
                "client_id",
                "booking_id",
                "policy_number",
                "insurer",
                "sum_insured",
                "start_date",
                "end_date",
                "premium_amount",
            ],
        }
    }
}

impl Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Clients => "Clients",
            Self::Bookings => "Bookings",
            Self::Visas => "Visas",
            Self::Passports => "Passports",
            Self::Policies => "Policies",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ViewKind {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clients" => Ok(Self::Clients),
            "bookings" => Ok(Self::Bookings),
            "visas" => Ok(Self::Visas),
            "passports" => Ok(Self::Passports),
            "policies" => Ok(Self::Policies),
            _ => Err(ViewError::UnknownView(s.to_string())),
        }
    }
}

/// Caller mistakes when asking for a view. Bad record data never ends up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("Unknown view: `{0}`")]
    UnknownView(String),
    #[error("Unknown column `{column}` for view {view}")]
    UnknownColumn { view: ViewKind, column: String },
    #[error("Unknown sort direction: `{0}`. Expected `asc` or `desc`")]
    UnknownSortDirection(String),
}

/// A single cell value as seen by search, filter and sort
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Empty,
}

impl FieldValue {
    pub fn text(value: &Option<String>) -> Self {
        match value {
            Some(value) => Self::Text(value.clone()),
            None => Self::Empty,
        }
    }

    pub fn number(value: Option<f64>) -> Self {
        match value {
            Some(value) => Self::Number(value),
            None => Self::Empty,
        }
    }

    pub fn id(value: &ID) -> Self {
        Self::Text(value.as_string())
    }

    pub fn optional_id(value: &Option<ID>) -> Self {
        match value {
            Some(value) => Self::id(value),
            None => Self::Empty,
        }
    }

    /// Numbers compare numerically with each other, everything else by its
    /// string form
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            _ => self.to_string().cmp(&other.to_string()),
        }
    }

    fn contains_lowercase(&self, needle: &str) -> bool {
        self.to_string().to_lowercase().contains(needle)
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => write!(f, "{}", value),
            Self::Number(value) => write!(f, "{}", value),
            Self::Empty => Ok(()),
        }
    }
}

/// A record kind that can be shown as a table row.
///
/// Every kind declares its full field list and one accessor; the view
/// pipeline never looks at a record any other way.
pub trait Tabular {
    const KIND: ViewKind;

    /// Every field in declaration order, `id` and `created_at` included
    const FIELDS: &'static [&'static str];

    /// Value of `field`, or `None` when the field is not part of this kind
    fn value(&self, field: &str) -> Option<FieldValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Ascending
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(ViewError::UnknownSortDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Sort state after a click on the header of `column`: the active
    /// ascending column flips to descending, anything else sorts ascending.
    pub fn toggle(current: Option<&SortSpec>, column: &str) -> Self {
        match current {
            Some(current)
                if current.column == column && current.direction == SortDirection::Ascending =>
            {
                Self::descending(column)
            }
            _ => Self::ascending(column),
        }
    }
}

/// Everything the table needs to derive its rows besides the data itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewQuery {
    /// Free text matched against every field. The caller debounces it.
    pub search: Option<String>,
    /// Column name to substring. Empty values are ignored.
    pub filters: BTreeMap<String, String>,
    pub sort: Option<SortSpec>,
}

impl ViewQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_filter(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(column.into(), value.into());
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    fn validate(&self, kind: ViewKind, fields: &[&str]) -> Result<(), ViewError> {
        let columns = self
            .filters
            .keys()
            .map(|c| c.as_str())
            .chain(self.sort.iter().map(|s| s.column.as_str()));
        for column in columns {
            if !fields.contains(&column) {
                return Err(ViewError::UnknownColumn {
                    view: kind,
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Search, then filter, then sort `rows`.
///
/// The input is left untouched and the output holds clones of the matching
/// rows. Sorting is stable so equal keys keep their filtered order.
pub fn project<T: Tabular + Clone>(rows: &[T], query: &ViewQuery) -> Result<Vec<T>, ViewError> {
    query.validate(T::KIND, T::FIELDS)?;

    let needle = query
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase());
    let filters = query
        .filters
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(column, value)| (column.as_str(), value.to_lowercase()))
        .collect::<Vec<_>>();

    let mut projected = rows
        .iter()
        .filter(|row| match &needle {
            Some(needle) => matches_search(*row, needle),
            None => true,
        })
        .filter(|row| matches_filters(*row, &filters))
        .cloned()
        .collect::<Vec<_>>();

    if let Some(sort) = &query.sort {
        projected.sort_by(|a, b| {
            let ordering = compare_rows(a, b, &sort.column);
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    Ok(projected)
}

fn matches_search<T: Tabular>(row: &T, needle: &str) -> bool {
    T::FIELDS
        .iter()
        .filter_map(|field| row.value(field))
        .any(|value| value.contains_lowercase(needle))
}

fn matches_filters<T: Tabular>(row: &T, filters: &[(&str, String)]) -> bool {
    filters.iter().all(|(column, value)| match row.value(column) {
        Some(field) => field.contains_lowercase(value),
        None => false,
    })
}

fn compare_rows<T: Tabular>(a: &T, b: &T, column: &str) -> Ordering {
    let a = a.value(column).unwrap_or(FieldValue::Empty);
    let b = b.value(column).unwrap_or(FieldValue::Empty);
    a.compare(&b)
}

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use travel_desk_domain::{ViewKind, ViewRows};

pub mod get_view {
    use super::*;

    /// Query keys carrying a column filter start with this prefix,
    /// e.g. `filter.nationality=indian`
    pub const FILTER_PREFIX: &str = "filter.";

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub view: String,
    }

    #[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub search: Option<String>,
        /// Column to sort on
        #[serde(skip_serializing_if = "Option::is_none")]
        pub sort: Option<String>,
        /// `asc` or `desc`, ascending when left out
        #[serde(skip_serializing_if = "Option::is_none")]
        pub direction: Option<String>,
        #[serde(flatten)]
        pub rest: HashMap<String, String>,
    }

    impl QueryParams {
        /// Column filters keyed by column name
        pub fn filters(&self) -> BTreeMap<String, String> {
            self.rest
                .iter()
                .filter_map(|(key, value)| {
                    key.strip_prefix(FILTER_PREFIX)
                        .map(|column| (column.to_string(), value.clone()))
                })
                .collect()
        }

        pub fn with_filter(mut self, column: &str, value: &str) -> Self {
            self.rest
                .insert(format!("{}{}", FILTER_PREFIX, column), value.to_string());
            self
        }
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub columns: Vec<String>,
        pub total: usize,
        pub data: ViewRows,
    }

    impl APIResponse {
        pub fn new(view: ViewKind, rows: ViewRows) -> Self {
            Self {
                columns: view.columns().iter().map(|c| c.to_string()).collect(),
                total: rows.len(),
                data: rows,
            }
        }
    }

}

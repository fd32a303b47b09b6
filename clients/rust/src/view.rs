use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::{collections::BTreeMap, sync::Arc};
use travel_desk_api_structs::get_view;
use travel_desk_domain::{SortSpec, ViewKind};

#[derive(Clone)]
pub struct ViewClient {
    base: Arc<BaseClient>,
}

pub struct GetViewInput {
    pub view: ViewKind,
    pub search: Option<String>,
    pub filters: BTreeMap<String, String>,
    pub sort: Option<SortSpec>,
}

impl GetViewInput {
    pub fn new(view: ViewKind) -> Self {
        Self {
            view,
            search: None,
            filters: Default::default(),
            sort: None,
        }
    }

    fn query_params(&self) -> get_view::QueryParams {
        let query = get_view::QueryParams {
            search: self.search.clone(),
            sort: self.sort.as_ref().map(|s| s.column.clone()),
            direction: self.sort.as_ref().map(|s| s.direction.to_string()),
            rest: Default::default(),
        };
        self.filters
            .iter()
            .fold(query, |query, (column, value)| query.with_filter(column, value))
    }
}

impl ViewClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self, input: &GetViewInput) -> APIResponse<get_view::APIResponse> {
        self.base
            .get_with_query(
                format!("views/{}", input.view),
                &input.query_params(),
                StatusCode::OK,
            )
            .await
    }
}

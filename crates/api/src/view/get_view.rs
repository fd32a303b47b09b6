use crate::{
    error::TravelDeskError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use std::collections::BTreeMap;
use tracing::debug;
use travel_desk_api_structs::get_view::*;
use travel_desk_domain::{SortDirection, SortSpec, ViewError, ViewKind, ViewQuery, ViewRows};
use travel_desk_infra::TravelDeskContext;

fn handle_error(e: UseCaseError) -> TravelDeskError {
    match e {
        UseCaseError::InvalidQuery(e) => e.into(),
    }
}

pub async fn get_view_controller(
    path: web::Path<PathParams>,
    query: web::Query<QueryParams>,
    ctx: web::Data<TravelDeskContext>,
) -> Result<HttpResponse, TravelDeskError> {
    let filters = query.filters();
    let query = query.into_inner();
    let usecase = GetViewUseCase {
        view: path.into_inner().view,
        search: query.search,
        sort: query.sort,
        direction: query.direction,
        filters,
    };

    execute(usecase, &ctx)
        .await
        .map(|(view, rows)| HttpResponse::Ok().json(APIResponse::new(view, rows)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetViewUseCase {
    pub view: String,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub filters: BTreeMap<String, String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidQuery(ViewError),
}

impl From<ViewError> for UseCaseError {
    fn from(e: ViewError) -> Self {
        Self::InvalidQuery(e)
    }
}

impl GetViewUseCase {
    fn query(&self) -> Result<ViewQuery, ViewError> {
        let direction = match &self.direction {
            Some(direction) => direction.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };
        let sort = self.sort.as_ref().map(|column| SortSpec {
            column: column.clone(),
            direction,
        });
        Ok(ViewQuery {
            search: self.search.clone(),
            filters: self.filters.clone(),
            sort,
        })
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetViewUseCase {
    type Response = (ViewKind, ViewRows);

    type Error = UseCaseError;

    const NAME: &'static str = "GetView";

    async fn execute(&mut self, ctx: &TravelDeskContext) -> Result<Self::Response, Self::Error> {
        let view = self.view.parse::<ViewKind>()?;
        let query = self.query()?;

        let snapshot = ctx.repos.snapshots.get().await;
        let rows = snapshot.project(view, &query)?;
        debug!("Projected {} rows for view {}", rows.len(), view);

        Ok((view, rows))
    }
}

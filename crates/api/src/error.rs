use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use thiserror::Error;
use travel_desk_domain::ViewError;

#[derive(Error, Debug)]
pub enum TravelDeskError {
    #[error("Internal server error")]
    InternalError,
    #[error("The reference date: {0}, is not a valid YYYY-MM-DD date.")]
    InvalidReferenceDate(String),
    #[error("The view: {0}, does not exist.")]
    UnknownView(String),
    #[error("Invalid view query. Error message: `{0}`")]
    InvalidViewQuery(ViewError),
}

impl From<ViewError> for TravelDeskError {
    fn from(e: ViewError) -> Self {
        match e {
            ViewError::UnknownView(view) => Self::UnknownView(view),
            e => Self::InvalidViewQuery(e),
        }
    }
}

impl actix_web::error::ResponseError for TravelDeskError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidReferenceDate(_) | Self::InvalidViewQuery(_) => StatusCode::BAD_REQUEST,
            Self::UnknownView(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
            .body(self.to_string())
    }
}

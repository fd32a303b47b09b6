mod dashboard;
mod reminder;
mod snapshot;
mod status;
mod view;

pub mod dtos {
    pub use crate::reminder::dtos::*;
}

pub use crate::dashboard::api::*;
pub use crate::reminder::api::*;
pub use crate::snapshot::api::*;
pub use crate::status::api::*;
pub use crate::view::api::*;

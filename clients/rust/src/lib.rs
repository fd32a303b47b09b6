mod base;
mod dashboard;
mod debounce;
mod reminder;
mod shared;
mod snapshot;
mod status;
mod view;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use dashboard::DashboardClient;
pub use debounce::SearchDebouncer;
use reminder::ReminderClient;
use snapshot::SnapshotClient;
use status::StatusClient;
use std::sync::Arc;
pub use travel_desk_api_structs::dtos::*;
use view::ViewClient;
pub use view::GetViewInput;

// Domain
pub use travel_desk_domain::{
    Booking, ChartPoint, Client, ClientBookings, DashboardSummary, Passport, Policy,
    ReminderKind, Snapshot, SortDirection, SortSpec, ViewKind, ViewRows, Visa, ID,
};

/// Travel Desk SDK
///
/// The SDK contains methods for interacting with the Travel Desk server
/// API.
#[derive(Clone)]
pub struct TravelDeskSDK {
    pub dashboard: DashboardClient,
    pub reminder: ReminderClient,
    pub snapshot: SnapshotClient,
    pub status: StatusClient,
    pub view: ViewClient,
}

impl TravelDeskSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));
        let dashboard = DashboardClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let snapshot = SnapshotClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let view = ViewClient::new(base);

        Self {
            dashboard,
            reminder,
            snapshot,
            status,
            view,
        }
    }
}

mod booking;
mod client;
pub mod dashboard;
pub mod date;
mod passport;
mod policy;
mod reminder;
mod shared;
mod snapshot;
mod view;
mod visa;

pub use booking::Booking;
pub use client::{Client, UNKNOWN_CLIENT_NAME};
pub use dashboard::{ChartPoint, ClientBookings, DashboardSummary};
pub use passport::Passport;
pub use policy::Policy;
pub use reminder::{
    generate_reminders, group_by_kind, sort_reminders, Reminder, ReminderGroup, ReminderKind,
    REMINDER_HORIZON_DAYS,
};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use snapshot::{Snapshot, ViewRows};
pub use view::{
    project, FieldValue, SortDirection, SortSpec, Tabular, ViewError, ViewKind, ViewQuery,
};
pub use visa::Visa;

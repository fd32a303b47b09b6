use serde::{Deserialize, Serialize};
use travel_desk_domain::Snapshot;

pub mod set_snapshot {
    use super::*;

    pub type RequestBody = Snapshot;

    /// Number of records now served per collection
    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub clients: usize,
        pub bookings: usize,
        pub visas: usize,
        pub passports: usize,
        pub policies: usize,
    }

    impl APIResponse {
        pub fn new(snapshot: &Snapshot) -> Self {
            Self {
                clients: snapshot.clients.len(),
                bookings: snapshot.bookings.len(),
                visas: snapshot.visas.len(),
                passports: snapshot.passports.len(),
                policies: snapshot.policies.len(),
            }
        }
    }
}

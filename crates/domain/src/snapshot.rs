use crate::{
    booking::Booking,
    client::Client,
    passport::Passport,
    policy::Policy,
    shared::entity::{Entity, ID},
    view::{project, ViewError, ViewKind, ViewQuery},
    visa::Visa,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Point in time copy of every collection. Derivations only ever read it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub clients: Vec<Client>,
    pub bookings: Vec<Booking>,
    pub visas: Vec<Visa>,
    pub passports: Vec<Passport>,
    pub policies: Vec<Policy>,
}

impl Snapshot {
    pub fn client_lookup(&self) -> HashMap<&ID, &Client> {
        self.clients.iter().map(|c| (c.id(), c)).collect()
    }

    /// Runs the view pipeline on the collection behind `view`
    pub fn project(&self, view: ViewKind, query: &ViewQuery) -> Result<ViewRows, ViewError> {
        let rows = match view {
            ViewKind::Clients => ViewRows::Clients(project(&self.clients, query)?),
            ViewKind::Bookings => ViewRows::Bookings(project(&self.bookings, query)?),
            ViewKind::Visas => ViewRows::Visas(project(&self.visas, query)?),
            ViewKind::Passports => ViewRows::Passports(project(&self.passports, query)?),
            ViewKind::Policies => ViewRows::Policies(project(&self.policies, query)?),
        };
        Ok(rows)
    }
}

/// Projected rows of one view, keeping the shape of the input records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", content = "rows")]
pub enum ViewRows {
    Clients(Vec<Client>),
    Bookings(Vec<Booking>),
    Visas(Vec<Visa>),
    Passports(Vec<Passport>),
    Policies(Vec<Policy>),
}

impl ViewRows {
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Clients(_) => ViewKind::Clients,
            Self::Bookings(_) => ViewKind::Bookings,
            Self::Visas(_) => ViewKind::Visas,
            Self::Passports(_) => ViewKind::Passports,
            Self::Policies(_) => ViewKind::Policies,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Clients(rows) => rows.len(),
            Self::Bookings(rows) => rows.len(),
            Self::Visas(rows) => rows.len(),
            Self::Passports(rows) => rows.len(),
            Self::Policies(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_deserializes_partial_snapshots() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"clients": [{"id": "c1", "first_name": "Ann"}]}"#).unwrap();
        assert_eq!(snapshot.clients.len(), 1);
        assert!(snapshot.bookings.is_empty());
        assert!(snapshot.policies.is_empty());
    }

    #[test]
    fn it_projects_the_requested_collection() {
        let mut snapshot = Snapshot::default();
        snapshot.clients.push(Client::new("Ann", "Lee"));
        snapshot.clients.push(Client::new("Bob", "Stone"));
        snapshot.passports.push(Passport::default());

        let rows = snapshot
            .project(ViewKind::Clients, &ViewQuery::default().with_search("stone"))
            .unwrap();
        assert_eq!(rows.kind(), ViewKind::Clients);
        assert_eq!(rows.len(), 1);

        let rows = snapshot
            .project(ViewKind::Passports, &ViewQuery::default())
            .unwrap();
        assert_eq!(rows.len(), 1);

        let err = snapshot
            .project(ViewKind::Visas, &ViewQuery::default().with_filter("first_name", "a"))
            .unwrap_err();
        assert!(matches!(err, ViewError::UnknownColumn { .. }));
    }
}

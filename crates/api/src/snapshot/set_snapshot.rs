use crate::{
    error::TravelDeskError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use tracing::info;
use travel_desk_api_structs::set_snapshot::*;
use travel_desk_domain::Snapshot;
use travel_desk_infra::TravelDeskContext;

fn handle_error(e: UseCaseError) -> TravelDeskError {
    match e {
        UseCaseError::StorageError => TravelDeskError::InternalError,
    }
}

pub async fn set_snapshot_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<TravelDeskContext>,
) -> Result<HttpResponse, TravelDeskError> {
    let usecase = SetSnapshotUseCase {
        snapshot: Some(body.0),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(res))
        .map_err(handle_error)
}

/// Replaces the collections every derivation reads from
#[derive(Debug)]
pub struct SetSnapshotUseCase {
    pub snapshot: Option<Snapshot>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetSnapshotUseCase {
    type Response = APIResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "SetSnapshot";

    async fn execute(&mut self, ctx: &TravelDeskContext) -> Result<Self::Response, Self::Error> {
        let snapshot = self.snapshot.take().unwrap_or_default();
        let res = APIResponse::new(&snapshot);

        ctx.repos
            .snapshots
            .replace(snapshot)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!(
            clients = res.clients,
            bookings = res.bookings,
            visas = res.visas,
            passports = res.passports,
            policies = res.policies,
            "Snapshot replaced"
        );

        Ok(res)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use travel_desk_domain::Client;

    #[actix_web::main]
    #[test]
    async fn it_replaces_the_served_snapshot() {
        let ctx = TravelDeskContext::create_inmemory();
        let mut snapshot = Snapshot::default();
        snapshot.clients.push(Client::new("Ann", "Lee"));

        let mut usecase = SetSnapshotUseCase {
            snapshot: Some(snapshot),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.clients, 1);
        assert_eq!(res.bookings, 0);
        assert_eq!(ctx.repos.snapshots.get().await.clients.len(), 1);
    }
}

use crate::{
    error::TravelDeskError,
    shared::{
        reference_date::{reference_date, InvalidReferenceDate},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use tracing::debug;
use travel_desk_api_structs::get_dashboard::*;
use travel_desk_domain::{generate_reminders, DashboardSummary};
use travel_desk_infra::TravelDeskContext;

fn handle_error(e: UseCaseError) -> TravelDeskError {
    match e {
        UseCaseError::InvalidReferenceDate(date) => TravelDeskError::InvalidReferenceDate(date),
    }
}

pub async fn get_dashboard_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<TravelDeskContext>,
) -> Result<HttpResponse, TravelDeskError> {
    let usecase = GetDashboardUseCase {
        date: query.0.date,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(res))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetDashboardUseCase {
    pub date: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidReferenceDate(String),
}

impl From<InvalidReferenceDate> for UseCaseError {
    fn from(e: InvalidReferenceDate) -> Self {
        Self::InvalidReferenceDate(e.0)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDashboardUseCase {
    type Response = APIResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetDashboard";

    async fn execute(&mut self, ctx: &TravelDeskContext) -> Result<Self::Response, Self::Error> {
        let reference_date = reference_date(self.date.as_deref(), ctx)?;
        let snapshot = ctx.repos.snapshots.get().await;

        let reminders = generate_reminders(&snapshot, reference_date);
        let summary = DashboardSummary::new(
            &snapshot,
            &reminders,
            reference_date,
            ctx.config.expiring_soon_days,
        );
        debug!(
            "Dashboard for {}: {} clients, {} bookings, {} expiring soon",
            reference_date, summary.total_clients, summary.total_bookings, summary.expiring_soon
        );

        Ok(APIResponse {
            reference_date,
            summary,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use travel_desk_domain::{Booking, Passport, Snapshot, ID};

    fn snapshot() -> Snapshot {
        let client_id: ID = "c1".parse().unwrap();
        let mut trip = Booking::new(client_id.clone());
        trip.check_in = Some("2024-01-01".into());
        trip.check_out = Some("2024-01-05".into());
        let mut day_trip = Booking::new(client_id.clone());
        day_trip.check_in = Some("2024-02-01".into());
        day_trip.check_out = Some("2024-02-01".into());

        Snapshot {
            bookings: vec![trip, day_trip],
            passports: vec![
                Passport::new(client_id.clone(), "2024-06-20"),
                Passport::new(client_id, "2024-12-01"),
            ],
            ..Default::default()
        }
    }

    #[actix_web::main]
    #[test]
    async fn it_summarizes_the_snapshot() {
        let mut ctx = TravelDeskContext::create_inmemory_with(snapshot());
        ctx.config.expiring_soon_days = 30;

        let mut usecase = GetDashboardUseCase {
            date: Some("2024-06-10".into()),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.summary.total_bookings, 2);
        assert_eq!(res.summary.total_clients, 0);
        assert_eq!(res.summary.average_trip_duration, 4);
        assert_eq!(res.summary.expiring_soon, 1);
        assert_eq!(res.summary.top_clients[0].bookings, 2);
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_invalid_reference_dates() {
        let ctx = TravelDeskContext::create_inmemory();
        let mut usecase = GetDashboardUseCase {
            date: Some("10/06/2024".into()),
        };
        assert!(usecase.execute(&ctx).await.is_err());
    }
}

use crate::{
    error::TravelDeskError,
    shared::{
        reference_date::{reference_date, InvalidReferenceDate},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use tracing::debug;
use travel_desk_api_structs::get_reminders::*;
use travel_desk_domain::{generate_reminders, Reminder};
use travel_desk_infra::TravelDeskContext;

fn handle_error(e: UseCaseError) -> TravelDeskError {
    match e {
        UseCaseError::InvalidReferenceDate(date) => TravelDeskError::InvalidReferenceDate(date),
    }
}

pub async fn get_reminders_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<TravelDeskContext>,
) -> Result<HttpResponse, TravelDeskError> {
    let usecase = GetRemindersUseCase {
        date: query.0.date,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.reference_date, res.reminders)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetRemindersUseCase {
    pub date: Option<String>,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub reference_date: NaiveDate,
    pub reminders: Vec<Reminder>,
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
impl UseCase for GetRemindersUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &TravelDeskContext) -> Result<Self::Response, Self::Error> {
        let reference_date = reference_date(self.date.as_deref(), ctx)?;
        let snapshot = ctx.repos.snapshots.get().await;
        let reminders = generate_reminders(&snapshot, reference_date);
        debug!(
            "Generated {} reminders for reference date {}",
            reminders.len(),
            reference_date
        );

        Ok(UseCaseResponse {
            reference_date,
            reminders,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use travel_desk_domain::{Client, ReminderKind, Snapshot};

    fn snapshot() -> Snapshot {
        let mut client = Client::new("Ann", "Lee");
        client.date_of_birth = Some("1990-06-15".into());
        Snapshot {
            clients: vec![client],
            ..Default::default()
        }
    }

    #[actix_web::main]
    #[test]
    async fn it_generates_reminders_for_the_given_date() {
        let ctx = TravelDeskContext::create_inmemory_with(snapshot());

        let mut usecase = GetRemindersUseCase {
            date: Some("2024-06-10".into()),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.reminders.len(), 1);
        assert_eq!(res.reminders[0].kind, ReminderKind::Birthday);
        assert_eq!(res.reminders[0].days_left, Some(5));
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_invalid_reference_dates() {
        let ctx = TravelDeskContext::create_inmemory_with(snapshot());

        let mut usecase = GetRemindersUseCase {
            date: Some("2024-02-30".into()),
        };
        let res = usecase.execute(&ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::InvalidReferenceDate("2024-02-30".into())
        );
    }
}

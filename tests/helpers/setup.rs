use chrono::{NaiveDate, TimeZone, Utc};
use std::sync::Arc;
use travel_desk_api::Application;
use travel_desk_domain::Snapshot;
use travel_desk_infra::{Config, ISys, TravelDeskContext, Tz};
use travel_desk_sdk::TravelDeskSDK;

pub struct TestApp {
    pub config: Config,
}

/// Clock frozen at noon UTC on a given day
pub struct StaticTimeSys {
    pub timestamp_millis: i64,
}

impl StaticTimeSys {
    pub fn at(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).expect("Valid time");
        Self {
            timestamp_millis: Utc.from_utc_datetime(&noon).timestamp_millis(),
        }
    }
}

impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }
}

// Launch the application as a background task
pub async fn spawn_app(snapshot: Snapshot, today: NaiveDate) -> (TestApp, TravelDeskSDK) {
    let mut ctx = TravelDeskContext::create_inmemory_with(snapshot);
    ctx.config.port = 0; // Random port
    ctx.config.timezone = Tz::UTC;
    ctx.sys = Arc::new(StaticTimeSys::at(today));

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = TravelDeskSDK::new(address);
    (app, sdk)
}

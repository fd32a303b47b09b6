mod dashboard;
mod error;
mod reminder;
mod shared;
mod snapshot;
mod status;
mod view;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;
use travel_desk_infra::TravelDeskContext;

pub use error::TravelDeskError;

/// Snapshots are pushed whole, so allow far larger bodies than the default
const SNAPSHOT_BODY_LIMIT: usize = 16 * 1024 * 1024;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    dashboard::configure_routes(cfg);
    reminder::configure_routes(cfg);
    snapshot::configure_routes(cfg);
    status::configure_routes(cfg);
    view::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: TravelDeskContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(
        context: TravelDeskContext,
    ) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .app_data(web::JsonConfig::default().limit(SNAPSHOT_BODY_LIMIT))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

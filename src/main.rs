mod telemetry;

use telemetry::{get_subscriber, init_subscriber};
use travel_desk_api::Application;
use travel_desk_infra::setup_context;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("travel_desk_server".into(), "info".into());
    init_subscriber(subscriber)?;

    let context = setup_context().await?;

    let app = Application::new(context).await?;
    app.start().await?;
    Ok(())
}

use actix_web::{web, HttpResponse};
use travel_desk_api_structs::get_service_health::*;
use travel_desk_infra::TravelDeskContext;

async fn status(ctx: web::Data<TravelDeskContext>) -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up!\r\n".into(),
        timezone: ctx.config.timezone.name().into(),
        today: ctx.sys.today(&ctx.config.timezone),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}

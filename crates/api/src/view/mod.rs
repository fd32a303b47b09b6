mod get_view;

use actix_web::web;
use get_view::get_view_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/views/{view}", web::get().to(get_view_controller));
}

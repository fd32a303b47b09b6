mod set_snapshot;

use actix_web::web;
use set_snapshot::set_snapshot_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/snapshot", web::put().to(set_snapshot_controller));
}

pub mod current_time;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(current_time::current_time_routes);
}

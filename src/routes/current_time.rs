use actix_web::{web, HttpResponse};
use sea_orm::DatabaseConnection;
use tracing::error;

use crate::models::dto::CurrentTimeResponse;
use crate::services::time_log_service::TimeLogService;
use crate::utils::time::{format_rfc1123, ZonedClock};

pub const INSERT_FAILED_BODY: &str = "Database insert failed";

/// /current-time - Enregistre l'heure courante et la retourne en JSON.
/// Toutes les méthodes HTTP sont acceptées.
pub async fn record_current_time(
    db: web::Data<DatabaseConnection>,
    clock: web::Data<ZonedClock>,
) -> HttpResponse {
    // 1. Heure courante dans le fuseau configuré
    let now = clock.now();

    // 2. INSERT, en cas d'échec: 500 texte brut, pas de JSON
    if let Err(e) = TimeLogService::record(db.get_ref(), &now).await {
        error!("Error inserting time: {}", e);
        return HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(INSERT_FAILED_BODY);
    }

    // 3. Réponse JSON
    HttpResponse::Ok().json(CurrentTimeResponse {
        current_time: format_rfc1123(&now),
    })
}

pub fn current_time_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/current-time").to(record_current_time));
}

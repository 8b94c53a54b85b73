use chrono::DateTime;
use chrono_tz::Tz;
use sea_orm::*;

use crate::models::time_log;
use crate::utils::time::wall_clock;

pub struct TimeLogService;

impl TimeLogService {
    /// Insère une ligne dans time_log et retourne son id.
    /// Un seul INSERT paramétré, pas de relecture.
    pub async fn record(
        db: &DatabaseConnection,
        at: &DateTime<Tz>,
    ) -> Result<i32, DbErr> {
        let entry = time_log::ActiveModel {
            timestamp: Set(wall_clock(at)),
            ..Default::default()
        };

        let result = time_log::Entity::insert(entry).exec(db).await?;
        Ok(result.last_insert_id)
    }
}

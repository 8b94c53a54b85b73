//pour la réponse structurée
use serde::Serialize;

/// Corps JSON de GET /current-time
#[derive(Debug, Serialize)]
pub struct CurrentTimeResponse {
    pub current_time: String,
}

// connexion BD

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::error::AppError;

/// Ouvre le pool de connexions (paramètres par défaut du driver)
pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);

    Database::connect(options).await.map_err(AppError::Connection)
}

/// Vérification unique au démarrage, pas de retry
pub async fn ping(db: &DatabaseConnection) -> Result<(), AppError> {
    db.ping().await.map_err(AppError::Ping)
}

/// Libère le pool, appelé sur tous les chemins de sortie
pub async fn close(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => info!("Database connection closed."),
        Err(e) => warn!("Error closing database connection: {}", e),
    }
}

/// Connexion + ping. Si le ping échoue le pool est fermé avant de retourner l'erreur.
pub async fn open_checked(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let db = establish_connection(database_url).await?;
    if let Err(e) = ping(&db).await {
        close(db).await;
        return Err(e);
    }
    Ok(db)
}

//! Démarrage: configuration, connexion BD, serveur, arrêt.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::AppConfig;
use crate::db;
use crate::error::AppError;
use crate::server;

/// Lance le service avec la configuration de l'environnement
pub async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    run_with(config).await
}

pub async fn run_with(config: AppConfig) -> Result<(), AppError> {
    info!("Using DSN: {}", config.redacted_dsn());

    let db = db::open_checked(&config.database_url).await?;
    info!("Connected to database.");

    // Le pool est fermé quel que soit le résultat du serveur
    let result = serve(&config, db.clone()).await;
    db::close(db).await;
    result
}

async fn serve(config: &AppConfig, db: DatabaseConnection) -> Result<(), AppError> {
    let (server, addr) = server::build_server(
        db,
        config.clock,
        &config.bind_addr(),
        config.shutdown_timeout,
    )?;
    info!("Server running on {} (timezone: {})", addr, config.clock.timezone().name());

    if config.graceful_shutdown {
        server::serve_until(server, server::shutdown_signal(), config.shutdown_timeout).await
    } else {
        server::serve_forever(server).await
    }
}

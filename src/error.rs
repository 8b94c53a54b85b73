// ============================================================================
// ERREURS
// ============================================================================
//
// Description:
//   Erreurs de démarrage et d'arrêt du processus. Toutes sont fatales:
//   main les logue puis quitte avec le code 1.
//
//   Les erreurs par requête (insert échoué) ne passent PAS par ici,
//   elles sont converties en HTTP 500 directement dans la route.
//
// ============================================================================

use std::io;
use std::time::Duration;

use sea_orm::DbErr;
use thiserror::Error;

/// Erreurs de lecture de la configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    MissingVar(&'static str),

    #[error("invalid DSN: {0}")]
    InvalidDsn(String),

    #[error("unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to connect to database: {0}")]
    Connection(#[source] DbErr),

    #[error("database ping failed: {0}")]
    Ping(#[source] DbErr),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Server(#[source] io::Error),

    #[error("server shutdown failed: {0}")]
    Shutdown(String),

    #[error("server shutdown did not complete within {0:?}")]
    ShutdownTimeout(Duration),
}

// ============================================================================
// CONFIGURATION
// ============================================================================
//
// Variables lues (après dotenv):
//   - DB_DSN                 : requis (repli sur DATABASE_URL)
//   - HOST / PORT            : 0.0.0.0 / 8080
//   - APP_TIMEZONE           : America/Toronto (si le fuseau n'a pas d'abréviation
//                              alphabétique, la réponse utilise l'offset numérique)
//   - GRACEFUL_SHUTDOWN      : true
//   - SHUTDOWN_TIMEOUT_SECS  : 5 (entre 1 et 3600)
//
// Points d'attention:
//   - Le parsing passe par une fonction de lookup pour que les tests
//     n'aient jamais à modifier l'environnement du processus
//
// ============================================================================

use std::env;
use std::time::Duration;

use crate::error::ConfigError;
use crate::utils::dsn;
use crate::utils::time::{DEFAULT_TIMEZONE, ZonedClock};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);
pub const MAX_SHUTDOWN_TIMEOUT_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// DSN tel que fourni, pour les logs (toujours masqué)
    pub raw_dsn: String,
    /// URL de connexion SeaORM
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub clock: ZonedClock,
    pub graceful_shutdown: bool,
    pub shutdown_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let raw_dsn = non_empty("DB_DSN")
            .or_else(|| non_empty("DATABASE_URL"))
            .ok_or(ConfigError::MissingVar("DB_DSN"))?;
        let database_url = dsn::normalize(&raw_dsn)?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let timezone = lookup("APP_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let clock = ZonedClock::from_name(&timezone)?;

        let graceful_shutdown = match lookup("GRACEFUL_SHUTDOWN") {
            Some(value) => parse_bool(&value)
                .ok_or(ConfigError::InvalidValue { key: "GRACEFUL_SHUTDOWN", value })?,
            None => true,
        };

        let shutdown_timeout = match lookup("SHUTDOWN_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                // 0 ferait échouer chaque arrêt
                Ok(secs) if (1..=MAX_SHUTDOWN_TIMEOUT_SECS).contains(&secs) => {
                    Duration::from_secs(secs)
                }
                _ => return Err(ConfigError::InvalidValue { key: "SHUTDOWN_TIMEOUT_SECS", value }),
            },
            None => DEFAULT_SHUTDOWN_TIMEOUT,
        };

        Ok(Self {
            raw_dsn,
            database_url,
            host,
            port,
            clock,
            graceful_shutdown,
            shutdown_timeout,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn redacted_dsn(&self) -> String {
        dsn::redact(&self.raw_dsn)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::ConfigError;

pub const DEFAULT_TIMEZONE: &str = "America/Toronto";

/// Format RFC 1123 (ex: "Mon, 02 Jan 2006 15:04:05 EST")
pub const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %Z";

/// Variante avec offset numérique (ex: "Sun, 14 Jul 2024 09:30:00 -0300")
pub const RFC1123Z_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Horloge murale dans un fuseau horaire fixe.
/// Le fuseau est validé au démarrage, il n'y a pas de repli silencieux.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Résout un nom IANA ("America/Toronto")
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        name.parse::<Tz>()
            .map(Self::new)
            .map_err(|_| ConfigError::InvalidTimezone(name.to_string()))
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }
}

/// Date/heure locale stockée dans la colonne `timestamp`
pub fn wall_clock(at: &DateTime<Tz>) -> NaiveDateTime {
    at.naive_local()
}

/// Certains fuseaux n'ont pas d'abréviation ("-03" pour America/Sao_Paulo),
/// on passe alors à l'offset numérique pour rester parsable.
pub fn format_rfc1123(at: &DateTime<Tz>) -> String {
    let abbreviation = at.format("%Z").to_string();
    if !abbreviation.is_empty() && abbreviation.chars().all(|c| c.is_ascii_alphabetic()) {
        at.format(RFC1123_FORMAT).to_string()
    } else {
        at.format(RFC1123Z_FORMAT).to_string()
    }
}

pub mod dsn;
pub mod time;

use tracing_subscriber::{EnvFilter, fmt};

/// Logs console, filtrés par RUST_LOG (défaut: info)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

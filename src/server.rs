// ============================================================================
// SERVEUR HTTP ET ARRÊT GRACIEUX
// ============================================================================
//
// Workflow (mode gracieux):
//   1. Le serveur tourne dans une tâche séparée
//   2. On attend le signal d'arrêt (SIGINT/SIGTERM en prod, future quelconque en test)
//   3. Plus de nouvelles connexions, les requêtes en cours ont `grace` pour finir
//   4. Délai dépassé => ShutdownTimeout (fatal, code de sortie 1)
//
// Points d'attention:
//   - Les signaux d'Actix sont désactivés, c'est ce module qui les gère
//   - Le keep-alive est plus court que le délai de grâce pour qu'une
//     connexion inactive ne bloque pas l'arrêt
//   - Les INSERT encore en cours après le délai sont abandonnés
//
// ============================================================================

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use actix_web::dev::Server;
use actix_web::{rt, web, App, HttpServer};
use sea_orm::DatabaseConnection;
use tokio::time::timeout;
use tracing::{error, info};

use crate::error::AppError;
use crate::routes;
use crate::utils::time::ZonedClock;

pub const KEEP_ALIVE: Duration = Duration::from_secs(2);

/// Construit et bind le serveur. Retourne aussi l'adresse réelle (utile avec le port 0).
pub fn build_server(
    db: DatabaseConnection,
    clock: ZonedClock,
    addr: &str,
    grace: Duration,
) -> Result<(Server, SocketAddr), AppError> {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(clock))
            .configure(routes::configure_routes)
    })
    .disable_signals()
    .keep_alive(KEEP_ALIVE)
    .shutdown_timeout(actix_shutdown_timeout(grace))
    .bind(addr)
    .map_err(|source| AppError::Bind {
        addr: addr.to_string(),
        source,
    })?;

    let bound = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| AppError::Bind {
            addr: addr.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrNotAvailable, "no address bound"),
        })?;

    Ok((server.run(), bound))
}

/// Actix force la fermeture après ce délai, on garde une marge pour détecter le dépassement nous-mêmes
fn actix_shutdown_timeout(grace: Duration) -> u64 {
    grace.as_secs().saturating_add(1)
}

/// Sert jusqu'à ce que `shutdown` se termine, puis arrête le serveur en moins de `grace`.
pub async fn serve_until<F>(server: Server, shutdown: F, grace: Duration) -> Result<(), AppError>
where
    F: Future<Output = ()>,
{
    let handle = server.handle();
    let mut task = rt::spawn(server);

    tokio::select! {
        result = &mut task => {
            // Arrêt du serveur sans signal
            return match result {
                Ok(outcome) => outcome.map_err(AppError::Server),
                Err(e) => Err(AppError::Shutdown(e.to_string())),
            };
        }
        _ = shutdown => {}
    }

    info!("Shutting down server...");

    let stopping = async {
        handle.stop(true).await;
        task.await
    };

    match timeout(grace, stopping).await {
        Ok(Ok(Ok(()))) => {
            info!("Server exited gracefully.");
            Ok(())
        }
        Ok(Ok(Err(e))) => Err(AppError::Shutdown(e.to_string())),
        Ok(Err(e)) => Err(AppError::Shutdown(e.to_string())),
        Err(_) => Err(AppError::ShutdownTimeout(grace)),
    }
}

/// Mode simple: pas de gestion des signaux, tourne jusqu'à ce que le processus soit tué
pub async fn serve_forever(server: Server) -> Result<(), AppError> {
    server.await.map_err(AppError::Server)
}

/// Attend SIGINT (Ctrl+C) ou SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }
}

use time_log_backend::{app, utils};
use tracing::error;

#[actix_web::main]
async fn main() {
    dotenv::dotenv().ok();
    utils::init_tracing();

    if let Err(e) = app::run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

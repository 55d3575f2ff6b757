use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;

use sb_api::app::create_app;
use sb_api::routes::AppState;

use sb_core::services::auth::AuthService;
use sb_core::services::password::BcryptHasher;
use sb_core::services::registration::RegistrationService;
use sb_infra::database::{DatabasePool, MySqlAccountRepository, MySqlLoginAttemptRepository};
use sb_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting SeminarBook API server");

    // Load configuration
    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    // Initialize database and repositories
    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    pool.run_migrations()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let accounts = Arc::new(MySqlAccountRepository::new(&pool));
    let attempts = Arc::new(MySqlLoginAttemptRepository::new(&pool));
    let hasher = Arc::new(BcryptHasher::default());

    // Wire services
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&accounts),
        attempts,
        Arc::clone(&hasher),
    ));
    let registration_service = Arc::new(RegistrationService::new(accounts, hasher));

    let app_state = web::Data::new(AppState {
        auth_service,
        registration_service,
    });

    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await
}

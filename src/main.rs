//! ClubHub platform service
//!
//! Main application entry point

use tracing::info;

use ClubHub::{
    config::Settings,
    utils::logging,
    database::{DatabaseService, connection},
    services::ServiceFactory,
    api,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting {}", ClubHub::info());

    // Initialize database connection
    info!("Connecting to database...");
    let db_config = connection::DatabaseConfig::from_settings(&settings.database);
    let pool = connection::create_pool(&db_config).await?;

    // Run database migrations
    connection::run_migrations(&pool).await?;

    // Initialize services
    info!("Initializing services...");
    let database_service = DatabaseService::new(pool.clone());
    let services = ServiceFactory::new(database_service.clone(), settings.clone())?;

    // Start the HTTP API
    api::start_server(settings, pool, database_service, services).await?;

    info!("ClubHub has been shut down.");

    Ok(())
}

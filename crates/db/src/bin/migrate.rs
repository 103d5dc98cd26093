//! Standalone migration runner.
//!
//! Connects using `DATABASE_URL`, verifies the database answers, and
//! applies every pending migration. Intended for deploy scripts and
//! local bootstrap; the same migrator is embedded in the library.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carhive_db::config::DbConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carhive_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DbConfig::from_env();

    let pool = carhive_db::create_pool(&config)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    carhive_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    carhive_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");
}

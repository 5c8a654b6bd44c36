use anyhow::Result;
use befit::api::routes::{create_router, AppState};
use befit::auth::{JwtService, UserRole};
use befit::config::{run_migrations, AppConfig, CatalogSeeder, DatabaseConfig, StorageBackend};
use befit::repositories::Repositories;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let repositories = match config.storage_backend {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let pool = db_config.create_pool().await?;
            run_migrations(&pool).await?;
            info!("Connected to PostgreSQL and applied migrations");
            Repositories::postgres(pool)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on shutdown");
            Repositories::in_memory()
        }
    };

    if config.seed_catalog {
        CatalogSeeder::new(repositories.exercise_types.clone())
            .seed_catalog()
            .await?;
    }

    let jwt_service = JwtService::new(&config.jwt_secret);

    if config.issues_dev_admin_token() {
        // Tokens normally come from the identity provider sharing JWT_SECRET
        let token = jwt_service.create_access_token(&config.admin_email, &config.admin_email, UserRole::Admin)?;
        info!(email = %config.admin_email, "Development admin token available at debug level");
        debug!("Development admin token: {}", token);
    }

    let app = create_router(AppState::new(&repositories, jwt_service));

    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("BeFit server starting on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}

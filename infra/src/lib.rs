//! # Infrastructure Layer
//!
//! Concrete implementations behind the AgriAlert core contracts:
//! - **Database**: MySQL connection pool and `LocationRepository` using SQLx
//! - **Config**: layered configuration loading (`.env`, TOML file, environment)
//! - **Telemetry**: tracing subscriber installation

use std::sync::Arc;

use agri_core::errors::DomainError;
use agri_core::repositories::LocationRepository;
use agri_core::services::TokenService;
use agri_shared::AppConfig;

pub mod config;
pub mod database;
pub mod telemetry;

use database::{DatabasePool, MySqlLocationRepository};

/// Infrastructure service container
#[derive(Clone)]
pub struct InfrastructureServices {
    /// Configuration the services were built from
    pub config: AppConfig,
    /// Shared database pool
    pub pool: DatabasePool,
    /// Location store
    pub locations: Arc<dyn LocationRepository>,
    /// Token issuance and validation
    pub token_service: Arc<TokenService>,
}

/// Initialize infrastructure services
///
/// This function:
/// - loads configuration and installs the tracing subscriber
/// - creates the database pool and makes sure the schema exists
/// - builds the location repository and the token service
pub async fn initialize() -> Result<InfrastructureServices, InfrastructureError> {
    let config = config::load_config()?;
    telemetry::init_tracing(&config.logging)?;

    tracing::info!(environment = %config.environment, "Initializing infrastructure services...");

    let token_service = TokenService::from_jwt_config(&config.jwt)?;
    let pool = DatabasePool::new(config.database.clone()).await?;

    let locations = MySqlLocationRepository::new(pool.get_pool().clone());
    locations.ensure_schema().await?;

    tracing::info!("Infrastructure services initialized successfully");

    Ok(InfrastructureServices {
        config,
        pool,
        locations: Arc::new(locations),
        token_service: Arc::new(token_service),
    })
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error raised by a core service while wiring
    #[error(transparent)]
    Domain(#[from] DomainError),
}

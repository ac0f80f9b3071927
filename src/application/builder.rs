use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::api::router::AppState;
use crate::application::ports::ContactRepository;
use crate::config::Config;
use crate::infrastructure::persistence::PostgresContactRepository;

/// Application builder for explicit dependency injection
///
/// The pool is created here and handed to the repository; nothing holds a
/// process-wide connection.
pub struct ApplicationBuilder {
    config: Config,
    pool: Option<sqlx::PgPool>,
    repository: Option<Arc<dyn ContactRepository>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pool: None,
            repository: None,
        }
    }

    /// Initialize database connection pool with retry logic and run migrations
    pub async fn with_database(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Connecting to database");

        // Retry connection with exponential backoff
        let mut retries = 3;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(self.config.db_max_connections)
                .min_connections(self.config.db_min_connections)
                .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
                .idle_timeout(Some(Duration::from_secs(self.config.db_idle_timeout_secs)))
                .max_lifetime(Some(Duration::from_secs(self.config.db_max_lifetime_secs)))
                .connect(&self.config.database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    tracing::warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay,
                        retries,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!("Failed to connect to database after retries: {}", e);
                    return Err(Box::new(e));
                }
            }
        };

        info!(
            "Database pool configured: max={}, min={}, acquire_timeout={}s, idle_timeout={}s, max_lifetime={}s",
            self.config.db_max_connections,
            self.config.db_min_connections,
            self.config.db_acquire_timeout_secs,
            self.config.db_idle_timeout_secs,
            self.config.db_max_lifetime_secs
        );

        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to run migrations: {}", e);
                e
            })?;

        self.pool = Some(pool);
        Ok(self)
    }

    /// Create the Postgres repository and verify the table layout
    pub async fn with_infrastructure(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = self.pool.as_ref().ok_or("Database pool not initialized")?;

        let repository = PostgresContactRepository::new(pool.clone());
        repository.verify_schema().await.map_err(|e| {
            tracing::error!("Schema validation failed: {}", e);
            e
        })?;
        info!("Schema validated, all required columns present");

        self.repository = Some(Arc::new(repository));
        Ok(self)
    }

    /// Use a caller-supplied repository instead of Postgres
    pub fn with_repository(mut self, repository: Arc<dyn ContactRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let repository = self
            .repository
            .ok_or("Contact repository not initialized")?;

        let state = AppState::new(repository, &self.config);
        info!(
            postal_code_format = %self.config.postal_code_format,
            sanitize_profile = %self.config.sanitize_profile,
            "Application layer initialized"
        );
        Ok(state)
    }

    /// Database pool, for shutting it down after the server drains
    pub fn pool(&self) -> Option<&sqlx::PgPool> {
        self.pool.as_ref()
    }
}

//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        analytics::{AnalyticsService, PgAnalyticsService},
        products::{PgProductsService, ProductsService},
        reports::{PgReportsService, ReportsService},
        seeding::{PgSeedingService, SeedingService},
        testimonials::{PgTestimonialsService, TestimonialsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to configure database connection")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migration(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub testimonials: Arc<dyn TestimonialsService>,
    pub analytics: Arc<dyn AnalyticsService>,
    pub reports: Arc<dyn ReportsService>,
    pub seeding: Arc<dyn SeedingService>,
    db: Db,
}

impl AppContext {
    /// Build application context for `database_name` on the server at `database_url`.
    ///
    /// The pool connects lazily, so an unreachable server only surfaces on first use.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection string cannot be parsed.
    pub fn from_database(database_url: &str, database_name: &str) -> Result<Self, AppInitError> {
        let pool =
            database::connect(database_url, database_name).map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            testimonials: Arc::new(PgTestimonialsService::new(db.clone())),
            analytics: Arc::new(PgAnalyticsService::new(db.clone())),
            reports: Arc::new(PgReportsService::new(db.clone())),
            seeding: Arc::new(PgSeedingService::new(db.clone())),
            db,
        })
    }

    /// Apply pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or a migration fails.
    pub async fn migrate(&self) -> Result<(), AppInitError> {
        database::migrate(self.db.pool())
            .await
            .map_err(AppInitError::Migration)
    }
}

//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        analytics::PgAnalyticsService, products::PgProductsService, reports::PgReportsService,
        seeding::PgSeedingService, testimonials::PgTestimonialsService,
    },
};

use super::db::TestDb;

pub struct TestContext {
    _db: TestDb,
    pub products: PgProductsService,
    pub testimonials: PgTestimonialsService,
    pub analytics: PgAnalyticsService,
    pub reports: PgReportsService,
    pub seeding: PgSeedingService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            products: PgProductsService::new(db.clone()),
            testimonials: PgTestimonialsService::new(db.clone()),
            analytics: PgAnalyticsService::new(db.clone()),
            reports: PgReportsService::new(db.clone()),
            seeding: PgSeedingService::new(db),
            _db: test_db,
        }
    }
}

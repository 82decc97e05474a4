//! Seeding service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        products::repository::PgProductsRepository,
        seeding::{errors::SeedingServiceError, fixtures},
        testimonials::repository::PgTestimonialsRepository,
    },
};

/// Rows inserted by a seeding run. Zero means the table already had data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub products: usize,
    pub testimonials: usize,
}

#[derive(Debug, Clone)]
pub struct PgSeedingService {
    db: Db,
    products: PgProductsRepository,
    testimonials: PgTestimonialsRepository,
}

impl PgSeedingService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products: PgProductsRepository::new(),
            testimonials: PgTestimonialsRepository::new(),
        }
    }

    async fn seed_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<usize, SeedingServiceError> {
        self.products.lock_products(tx).await?;

        if self.products.count_products(tx).await? > 0 {
            info!("products already exist, skipping seed");

            return Ok(0);
        }

        let seed = fixtures::products();
        let seeded = seed.len();

        for (id, product) in seed {
            self.products.insert_product(tx, id, product).await?;
        }

        info!(count = seeded, "seeded products");

        Ok(seeded)
    }

    async fn seed_testimonials(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<usize, SeedingServiceError> {
        self.testimonials.lock_testimonials(tx).await?;

        if self.testimonials.count_testimonials(tx).await? > 0 {
            info!("testimonials already exist, skipping seed");

            return Ok(0);
        }

        let seed = fixtures::testimonials();
        let seeded = seed.len();

        for (id, testimonial) in seed {
            self.testimonials
                .insert_testimonial(tx, id, testimonial)
                .await?;
        }

        info!(count = seeded, "seeded testimonials");

        Ok(seeded)
    }
}

#[async_trait]
impl SeedingService for PgSeedingService {
    async fn seed_all(&self) -> Result<SeedReport, SeedingServiceError> {
        let mut tx = self.db.begin().await?;

        let report = SeedReport {
            products: self.seed_products(&mut tx).await?,
            testimonials: self.seed_testimonials(&mut tx).await?,
        };

        tx.commit().await?;

        Ok(report)
    }

    async fn reseed(&self) -> Result<SeedReport, SeedingServiceError> {
        let mut tx = self.db.begin().await?;

        // Same order as `seed_all`.
        self.products.lock_products(&mut tx).await?;
        self.testimonials.lock_testimonials(&mut tx).await?;

        let deleted_products = self.products.delete_all_products(&mut tx).await?;
        let deleted_testimonials = self.testimonials.delete_all_testimonials(&mut tx).await?;

        info!(
            products = deleted_products,
            testimonials = deleted_testimonials,
            "cleared catalog for reseed"
        );

        let report = SeedReport {
            products: self.seed_products(&mut tx).await?,
            testimonials: self.seed_testimonials(&mut tx).await?,
        };

        tx.commit().await?;

        Ok(report)
    }
}

#[automock]
#[async_trait]
pub trait SeedingService: Send + Sync {
    /// Seeds each of products and testimonials, but only when that table is empty.
    async fn seed_all(&self) -> Result<SeedReport, SeedingServiceError>;

    /// Deletes every product and testimonial, then seeds both. Runs in one transaction.
    async fn reseed(&self) -> Result<SeedReport, SeedingServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            products::{ProductsService, categories::SNEAKERS},
            testimonials::{TestimonialsService, data::NewTestimonial},
        },
        test::{TestContext, helpers::new_product},
    };

    use super::*;

    #[tokio::test]
    async fn seed_all_populates_empty_tables() -> TestResult {
        let ctx = TestContext::new().await;

        let report = ctx.seeding.seed_all().await?;

        assert_eq!(
            report,
            SeedReport {
                products: 9,
                testimonials: 4,
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn seed_all_twice_leaves_counts_unchanged() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.seeding.seed_all().await?;

        let second = ctx.seeding.seed_all().await?;

        assert_eq!(second, SeedReport::default());
        assert_eq!(ctx.products.list_products().await?.len(), 9);
        assert_eq!(ctx.testimonials.list_testimonials().await?.len(), 4);

        Ok(())
    }

    #[tokio::test]
    async fn seed_all_skips_only_populated_tables() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products
            .create_product(new_product("Dunk Low", SNEAKERS, false))
            .await?;

        let report = ctx.seeding.seed_all().await?;

        assert_eq!(
            report,
            SeedReport {
                products: 0,
                testimonials: 4,
            }
        );
        assert_eq!(ctx.products.list_products().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_seed_all_seeds_once() -> TestResult {
        let ctx = TestContext::new().await;

        let (first, second) = tokio::join!(ctx.seeding.seed_all(), ctx.seeding.seed_all());

        let mut reports = vec![first?, second?];
        reports.sort_by_key(|report| report.products);

        assert_eq!(
            reports,
            vec![
                SeedReport::default(),
                SeedReport {
                    products: 9,
                    testimonials: 4,
                },
            ]
        );
        assert_eq!(ctx.products.list_products().await?.len(), 9);

        Ok(())
    }

    #[tokio::test]
    async fn seeded_listing_puts_featured_watches_first() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.seeding.seed_all().await?;

        let products = ctx.products.list_products().await?;

        let featured_ids: Vec<i64> = products
            .iter()
            .take_while(|p| p.featured)
            .map(|p| p.id.into_i64())
            .collect();

        assert_eq!(products.len(), 9);
        assert_eq!(featured_ids, vec![1, 2, 3, 4]);
        assert!(products.iter().skip(4).all(|p| !p.featured));

        Ok(())
    }

    #[tokio::test]
    async fn reseed_restores_seed_set() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.seeding.seed_all().await?;

        ctx.products
            .create_product(new_product("Extra", SNEAKERS, false))
            .await?;
        ctx.testimonials
            .create_testimonial(NewTestimonial::new("Extra", 3))
            .await?;

        let report = ctx.seeding.reseed().await?;

        assert_eq!(
            report,
            SeedReport {
                products: 9,
                testimonials: 4,
            }
        );
        assert_eq!(ctx.products.list_products().await?.len(), 9);
        assert_eq!(ctx.testimonials.list_testimonials().await?.len(), 4);

        Ok(())
    }

    #[tokio::test]
    async fn reseed_on_empty_store_seeds_everything() -> TestResult {
        let ctx = TestContext::new().await;

        let report = ctx.seeding.reseed().await?;

        assert_eq!(report.products, 9);
        assert_eq!(report.testimonials, 4);

        Ok(())
    }
}

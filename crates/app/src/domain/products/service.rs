//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, featured first, then by category and id.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product with the next sequential id.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            products::categories::{CLOTHING, SNEAKERS, WATCHES},
            seeding::SeedingService,
        },
        test::{TestContext, helpers::new_product},
    };

    use super::*;

    #[tokio::test]
    async fn create_product_on_empty_table_assigns_id_one() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(new_product("Reloj", WATCHES, true))
            .await?;

        assert_eq!(product.id, ProductId::from_i64(1));
        assert_eq!(product.name, "Reloj");
        assert_eq!(product.category, WATCHES);
        assert!(product.featured);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_assigns_max_plus_one() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.seeding.seed_all().await?;

        let product = ctx
            .products
            .create_product(new_product("Gorra", CLOTHING, false))
            .await?;

        assert_eq!(product.id, ProductId::from_i64(10));

        Ok(())
    }

    #[tokio::test]
    async fn create_product_accepts_unknown_category() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(new_product("Mochila", "accesorios", false))
            .await?;

        assert_eq!(product.category, "accesorios");

        Ok(())
    }

    #[tokio::test]
    async fn create_product_keeps_optional_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(NewProduct {
                image: Some("https://example.com/watch.jpg".to_string()),
                price: Some("$299".to_string()),
                ..new_product("Reloj", WATCHES, true)
            })
            .await?;

        assert_eq!(product.image.as_deref(), Some("https://example.com/watch.jpg"));
        assert_eq!(product.price.as_deref(), Some("$299"));

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_creates_receive_distinct_ids() -> TestResult {
        let ctx = TestContext::new().await;

        let (first, second) = tokio::join!(
            ctx.products
                .create_product(new_product("Jordan Retro", SNEAKERS, false)),
            ctx.products
                .create_product(new_product("Nike Dunk", SNEAKERS, false)),
        );

        let mut ids = vec![first?.id.into_i64(), second?.id.into_i64()];
        ids.sort_unstable();

        assert_eq!(ids, vec![1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(new_product("Chaqueta", CLOTHING, false))
            .await?;

        let product = ctx.products.get_product(created.id).await?;

        assert_eq!(product, created);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductId::from_i64(42)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_empty_when_none_created() -> TestResult {
        let ctx = TestContext::new().await;

        let products = ctx.products.list_products().await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_products_orders_featured_then_category_then_id() -> TestResult {
        let ctx = TestContext::new().await;

        for product in [
            new_product("Sudadera", CLOTHING, false),
            new_product("Dunk", SNEAKERS, false),
            new_product("Cronógrafo", WATCHES, true),
            new_product("Chaqueta", CLOTHING, false),
            new_product("Digital", WATCHES, true),
            new_product("Reloj de bolsillo", WATCHES, false),
        ] {
            ctx.products.create_product(product).await?;
        }

        let products = ctx.products.list_products().await?;

        let order: Vec<(bool, &str, i64)> = products
            .iter()
            .map(|p| (p.featured, p.category.as_str(), p.id.into_i64()))
            .collect();

        assert_eq!(
            order,
            vec![
                (true, WATCHES, 3),
                (true, WATCHES, 5),
                (false, WATCHES, 6),
                (false, CLOTHING, 1),
                (false, CLOTHING, 4),
                (false, SNEAKERS, 2),
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_compares_categories_bytewise() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products
            .create_product(new_product("Mochila", "accesorios", false))
            .await?;
        ctx.products
            .create_product(new_product("Botas", "Zapatos", false))
            .await?;

        let products = ctx.products.list_products().await?;

        let categories: Vec<&str> = products.iter().map(|p| p.category.as_str()).collect();

        assert_eq!(categories, vec!["Zapatos", "accesorios"]);

        Ok(())
    }
}

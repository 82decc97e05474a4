//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::decode_count,
    domain::products::{
        data::NewProduct,
        records::{ProductId, ProductRecord},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LOCK_PRODUCTS_SQL: &str = include_str!("sql/lock_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const DELETE_ALL_PRODUCTS_SQL: &str = include_str!("sql/delete_all_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// Takes an `EXCLUSIVE` lock on the table until `tx` ends. Reads still proceed.
    pub(crate) async fn lock_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<(), sqlx::Error> {
        query(LOCK_PRODUCTS_SQL).execute(&mut **tx).await?;

        Ok(())
    }

    /// Insert with the next sequential id.
    ///
    /// The table lock is held until `tx` ends, so concurrent creators queue
    /// behind each other instead of reading the same maximum id.
    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        self.lock_products(tx).await?;

        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.name)
            .bind(product.category)
            .bind(product.image)
            .bind(product.price)
            .bind(product.featured)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn insert_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: ProductId,
        product: NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(INSERT_PRODUCT_SQL)
            .bind(id.into_i64())
            .bind(product.name)
            .bind(product.category)
            .bind(product.image)
            .bind(product.price)
            .bind(product.featured)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_PRODUCTS_SQL)
            .fetch_one(&mut **tx)
            .await?;

        decode_count("count", count)
    }

    pub(crate) async fn delete_all_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ALL_PRODUCTS_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            image: row.try_get("image")?,
            price: row.try_get("price")?,
            featured: row.try_get("featured")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

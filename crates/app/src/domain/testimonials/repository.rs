//! Testimonials Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::decode_count,
    domain::testimonials::{
        data::NewTestimonial,
        records::{TestimonialId, TestimonialRecord},
    },
};

const LIST_TESTIMONIALS_SQL: &str = include_str!("sql/list_testimonials.sql");
const LOCK_TESTIMONIALS_SQL: &str = include_str!("sql/lock_testimonials.sql");
const CREATE_TESTIMONIAL_SQL: &str = include_str!("sql/create_testimonial.sql");
const INSERT_TESTIMONIAL_SQL: &str = include_str!("sql/insert_testimonial.sql");
const COUNT_TESTIMONIALS_SQL: &str = include_str!("sql/count_testimonials.sql");
const DELETE_ALL_TESTIMONIALS_SQL: &str = include_str!("sql/delete_all_testimonials.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTestimonialsRepository;

impl PgTestimonialsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Approved testimonials only, ordered by id.
    pub(crate) async fn list_testimonials(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<TestimonialRecord>, sqlx::Error> {
        query_as::<Postgres, TestimonialRecord>(LIST_TESTIMONIALS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Takes an `EXCLUSIVE` lock on the table until `tx` ends. Reads still proceed.
    pub(crate) async fn lock_testimonials(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<(), sqlx::Error> {
        query(LOCK_TESTIMONIALS_SQL).execute(&mut **tx).await?;

        Ok(())
    }

    /// Insert with the next sequential id, counted over approved and unapproved rows alike.
    pub(crate) async fn create_testimonial(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        testimonial: NewTestimonial,
    ) -> Result<TestimonialRecord, sqlx::Error> {
        self.lock_testimonials(tx).await?;

        query_as::<Postgres, TestimonialRecord>(CREATE_TESTIMONIAL_SQL)
            .bind(testimonial.name)
            .bind(testimonial.rating)
            .bind(testimonial.review)
            .bind(testimonial.initials)
            .bind(testimonial.review_image)
            .bind(testimonial.approved)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn insert_testimonial(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: TestimonialId,
        testimonial: NewTestimonial,
    ) -> Result<TestimonialRecord, sqlx::Error> {
        query_as::<Postgres, TestimonialRecord>(INSERT_TESTIMONIAL_SQL)
            .bind(id.into_i64())
            .bind(testimonial.name)
            .bind(testimonial.rating)
            .bind(testimonial.review)
            .bind(testimonial.initials)
            .bind(testimonial.review_image)
            .bind(testimonial.approved)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_testimonials(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_TESTIMONIALS_SQL)
            .fetch_one(&mut **tx)
            .await?;

        decode_count("count", count)
    }

    pub(crate) async fn delete_all_testimonials(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ALL_TESTIMONIALS_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for TestimonialRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: TestimonialId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            rating: row.try_get("rating")?,
            review: row.try_get("review")?,
            initials: row.try_get("initials")?,
            review_image: row.try_get("review_image")?,
            approved: row.try_get("approved")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

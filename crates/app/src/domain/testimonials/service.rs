//! Testimonials service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::testimonials::{
        data::NewTestimonial, errors::TestimonialsServiceError, records::TestimonialRecord,
        repository::PgTestimonialsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgTestimonialsService {
    db: Db,
    repository: PgTestimonialsRepository,
}

impl PgTestimonialsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgTestimonialsRepository::new(),
        }
    }
}

#[async_trait]
impl TestimonialsService for PgTestimonialsService {
    async fn list_testimonials(&self) -> Result<Vec<TestimonialRecord>, TestimonialsServiceError> {
        let mut tx = self.db.begin().await?;

        let testimonials = self.repository.list_testimonials(&mut tx).await?;

        tx.commit().await?;

        Ok(testimonials)
    }

    async fn create_testimonial(
        &self,
        testimonial: NewTestimonial,
    ) -> Result<TestimonialRecord, TestimonialsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_testimonial(&mut tx, testimonial)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait TestimonialsService: Send + Sync {
    /// Retrieves approved testimonials ordered by id.
    async fn list_testimonials(&self) -> Result<Vec<TestimonialRecord>, TestimonialsServiceError>;

    /// Creates a testimonial with the next sequential id.
    async fn create_testimonial(
        &self,
        testimonial: NewTestimonial,
    ) -> Result<TestimonialRecord, TestimonialsServiceError>;
}

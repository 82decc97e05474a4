//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use thunder_app::domain::{
    analytics::MockAnalyticsService,
    products::{
        MockProductsService,
        records::{ProductId, ProductRecord},
    },
    reports::MockReportsService,
    seeding::MockSeedingService,
    testimonials::{
        MockTestimonialsService,
        records::{TestimonialId, TestimonialRecord},
    },
};

use crate::state::State;

struct Mocks {
    products: MockProductsService,
    testimonials: MockTestimonialsService,
    analytics: MockAnalyticsService,
    reports: MockReportsService,
    seeding: MockSeedingService,
}

impl Mocks {
    fn strict() -> Self {
        Self {
            products: strict_products_mock(),
            testimonials: strict_testimonials_mock(),
            analytics: strict_analytics_mock(),
            reports: strict_reports_mock(),
            seeding: strict_seeding_mock(),
        }
    }

    fn into_service(self, route: Router) -> Service {
        let state = Arc::new(State {
            products: Arc::new(self.products),
            testimonials: Arc::new(self.testimonials),
            analytics: Arc::new(self.analytics),
            reports: Arc::new(self.reports),
            seeding: Arc::new(self.seeding),
        });

        Service::new(Router::new().hoop(inject(state)).push(route))
    }
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Mocks {
        products,
        ..Mocks::strict()
    }
    .into_service(route)
}

pub(crate) fn testimonials_service(
    testimonials: MockTestimonialsService,
    route: Router,
) -> Service {
    Mocks {
        testimonials,
        ..Mocks::strict()
    }
    .into_service(route)
}

pub(crate) fn analytics_service(analytics: MockAnalyticsService, route: Router) -> Service {
    Mocks {
        analytics,
        ..Mocks::strict()
    }
    .into_service(route)
}

pub(crate) fn reports_service(reports: MockReportsService, route: Router) -> Service {
    Mocks {
        reports,
        ..Mocks::strict()
    }
    .into_service(route)
}

pub(crate) fn seeding_service(seeding: MockSeedingService, route: Router) -> Service {
    Mocks {
        seeding,
        ..Mocks::strict()
    }
    .into_service(route)
}

/// Service with every mock strict, for handlers that must not touch the store.
pub(crate) fn untouched_service(route: Router) -> Service {
    Mocks::strict().into_service(route)
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();

    products
}

fn strict_testimonials_mock() -> MockTestimonialsService {
    let mut testimonials = MockTestimonialsService::new();

    testimonials.expect_list_testimonials().never();
    testimonials.expect_create_testimonial().never();

    testimonials
}

fn strict_analytics_mock() -> MockAnalyticsService {
    let mut analytics = MockAnalyticsService::new();

    analytics.expect_record_click().never();
    analytics.expect_count_clicks().never();

    analytics
}

fn strict_reports_mock() -> MockReportsService {
    let mut reports = MockReportsService::new();

    reports.expect_conversion_stats().never();
    reports.expect_summary().never();

    reports
}

fn strict_seeding_mock() -> MockSeedingService {
    let mut seeding = MockSeedingService::new();

    seeding.expect_seed_all().never();
    seeding.expect_reseed().never();

    seeding
}

pub(crate) fn make_product(id: i64, category: &str, featured: bool) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i64(id),
        name: format!("Producto {id}"),
        category: category.to_string(),
        image: None,
        price: None,
        featured,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_testimonial(id: i64, rating: i32) -> TestimonialRecord {
    TestimonialRecord {
        id: TestimonialId::from_i64(id),
        name: format!("Cliente {id}"),
        rating,
        review: String::new(),
        initials: String::new(),
        review_image: None,
        approved: true,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

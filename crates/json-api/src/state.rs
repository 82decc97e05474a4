//! State

use std::sync::Arc;

use thunder_app::{
    context::AppContext,
    domain::{
        analytics::AnalyticsService, products::ProductsService, reports::ReportsService,
        seeding::SeedingService, testimonials::TestimonialsService,
    },
};

/// Services shared by every handler, injected into the depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) products: Arc<dyn ProductsService>,
    pub(crate) testimonials: Arc<dyn TestimonialsService>,
    pub(crate) analytics: Arc<dyn AnalyticsService>,
    pub(crate) reports: Arc<dyn ReportsService>,
    pub(crate) seeding: Arc<dyn SeedingService>,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: &AppContext) -> Arc<Self> {
        Arc::new(Self {
            products: Arc::clone(&app.products),
            testimonials: Arc::clone(&app.testimonials),
            analytics: Arc::clone(&app.analytics),
            reports: Arc::clone(&app.reports),
            seeding: Arc::clone(&app.seeding),
        })
    }
}

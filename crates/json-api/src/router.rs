//! App Router

use salvo::Router;

use crate::{admin, analytics, health, products, testimonials};

/// Every route under `/api`.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .get(health::handler)
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("{id}/image").put(products::image::handler)),
        )
        .push(
            Router::with_path("testimonials")
                .get(testimonials::index::handler)
                .post(testimonials::create::handler)
                .push(Router::with_path("{id}/image").put(testimonials::image::handler)),
        )
        .push(Router::with_path("telegram-click").post(analytics::click::handler))
        .push(Router::with_path("analytics/telegram-clicks").get(analytics::count::handler))
        .push(
            Router::with_path("admin")
                .push(Router::with_path("reseed").post(admin::reseed::handler))
                .push(
                    Router::with_path("conversion-stats").get(admin::conversion_stats::handler),
                )
                .push(Router::with_path("summary").get(admin::summary::handler)),
        )
}

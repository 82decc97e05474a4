//! Report Models

use crate::domain::{
    products::{
        categories::{CLOTHING, SNEAKERS, WATCHES},
        records::ProductRecord,
    },
    testimonials::records::TestimonialRecord,
};

/// What the landing page leads with.
pub const MESSAGE_FOCUS: &str = "Destacamos en relojes de lujo y zapatillas";

/// Who the campaign is aimed at.
pub const TARGET_AUDIENCE: &str = "Spanish-speaking mobile users from TikTok";

/// The funnel the clicks are counted for.
pub const CONVERSION_GOAL: &str = "TikTok → Landing Page → Telegram Channel";

/// Telegram click conversion statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionStats {
    pub total_clicks: u64,
    pub recent_clicks_24h: u64,
    pub mobile_clicks: u64,
    pub mobile_percentage: f64,
    pub message_focus: &'static str,
    pub target_audience: &'static str,
    pub conversion_goal: &'static str,
}

impl ConversionStats {
    #[must_use]
    pub fn new(total_clicks: u64, recent_clicks_24h: u64, mobile_clicks: u64) -> Self {
        Self {
            total_clicks,
            recent_clicks_24h,
            mobile_clicks,
            mobile_percentage: percentage(mobile_clicks, total_clicks),
            message_focus: MESSAGE_FOCUS,
            target_audience: TARGET_AUDIENCE,
            conversion_goal: CONVERSION_GOAL,
        }
    }
}

/// Product counts for the admin summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogSummary {
    pub total: usize,
    pub watches: usize,
    pub sneakers: usize,
    pub clothing: usize,
    pub featured: usize,
}

impl CatalogSummary {
    #[must_use]
    pub fn from_products(products: &[ProductRecord]) -> Self {
        let in_category =
            |category: &str| products.iter().filter(|p| p.category == category).count();

        Self {
            total: products.len(),
            watches: in_category(WATCHES),
            sneakers: in_category(SNEAKERS),
            clothing: in_category(CLOTHING),
            featured: products.iter().filter(|p| p.featured).count(),
        }
    }
}

/// Approved testimonial counts for the admin summary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TestimonialSummary {
    pub total: usize,
    pub average_rating: f64,
}

impl TestimonialSummary {
    #[must_use]
    pub fn from_testimonials(testimonials: &[TestimonialRecord]) -> Self {
        let total = testimonials.len();

        if total == 0 {
            return Self::default();
        }

        let sum: f64 = testimonials.iter().map(|t| f64::from(t.rating)).sum();

        let average_rating = sum / total as f64;

        Self {
            total,
            average_rating,
        }
    }
}

/// Admin dashboard summary.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSummary {
    pub products: CatalogSummary,
    pub testimonials: TestimonialSummary,
    pub telegram_clicks: u64,
}

/// `part` as a percentage of `whole`, rounded to one decimal; zero when `whole` is zero.
fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }

    (part as f64 / whole as f64 * 1000.0).round_ties_even() / 10.0
}

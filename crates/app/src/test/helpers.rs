//! Test Helpers

use jiff::Timestamp;

use crate::domain::{analytics::data::NewClickEvent, products::data::NewProduct};

pub(crate) fn new_product(name: &str, category: &str, featured: bool) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        category: category.to_string(),
        featured,
        ..NewProduct::default()
    }
}

pub(crate) fn click_at(occurred_at: Timestamp, user_agent: Option<&str>) -> NewClickEvent {
    NewClickEvent {
        occurred_at,
        user_agent: user_agent.map(str::to_string),
        referrer: None,
    }
}

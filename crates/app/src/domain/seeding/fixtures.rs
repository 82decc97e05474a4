//! Initial catalog and testimonials for the landing page.

use crate::domain::{
    products::{
        categories::{CLOTHING, SNEAKERS, WATCHES},
        data::NewProduct,
        records::ProductId,
    },
    testimonials::{data::NewTestimonial, records::TestimonialId},
};

fn product(name: &str, category: &str, image: &str, price: &str, featured: bool) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        category: category.to_string(),
        image: Some(format!(
            "https://images.unsplash.com/{image}?w=400&h=400&fit=crop"
        )),
        price: Some(price.to_string()),
        featured,
    }
}

fn testimonial(name: &str, rating: i32, review: &str, initials: &str) -> NewTestimonial {
    NewTestimonial {
        review: review.to_string(),
        initials: initials.to_string(),
        ..NewTestimonial::new(name, rating)
    }
}

/// Seed products with their fixed ids. Watches are the featured items.
pub fn products() -> Vec<(ProductId, NewProduct)> {
    [
        product(
            "Reloj Deportivo de Lujo",
            WATCHES,
            "photo-1524592094714-0f0654e20314",
            "$299",
            true,
        ),
        product(
            "Cronógrafo Estilo Suizo",
            WATCHES,
            "photo-1522312346375-d1a52e2b99b3",
            "$399",
            true,
        ),
        product(
            "Reloj Digital Premium",
            WATCHES,
            "photo-1434056886845-dac89ffe9b56",
            "$249",
            true,
        ),
        product(
            "Reloj Elegante Minimalista",
            WATCHES,
            "photo-1586281380403-90a7ad649393",
            "$199",
            true,
        ),
        product(
            "Jordan Retro High",
            SNEAKERS,
            "photo-1600185365483-26d7a4cc7519",
            "$189",
            false,
        ),
        product(
            "Air Jordan Low",
            SNEAKERS,
            "photo-1595950653106-6c9ebd614d3a",
            "$159",
            false,
        ),
        product(
            "Estilo Nike Dunk",
            SNEAKERS,
            "photo-1549298916-b41d501d3772",
            "$169",
            false,
        ),
        product(
            "Sudadera Streetwear Diseñador",
            CLOTHING,
            "photo-1556821840-3a63f95609a7",
            "$89",
            false,
        ),
        product(
            "Chaqueta Urbana Track",
            CLOTHING,
            "photo-1591047139829-d91aecb6caea",
            "$129",
            false,
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|(product, id)| (ProductId::from_i64(id), product))
    .collect()
}

/// Seed testimonials with their fixed ids.
pub fn testimonials() -> Vec<(TestimonialId, NewTestimonial)> {
    [
        testimonial(
            "Carlos Mendoza",
            5,
            "Thunder Services siempre entrega piezas auténticas. ¡Mi reloj llegó en perfectas condiciones y es increíble!",
            "CM",
        ),
        testimonial(
            "María González",
            5,
            "Los mejores precios en relojes de diseñador. La calidad es exactamente como prometieron. ¡Muy recomendado!",
            "MG",
        ),
        testimonial(
            "Diego Ramírez",
            5,
            "Entrega rápida y productos genuinos. Mi lugar favorito para relojes de lujo y zapatillas exclusivas.",
            "DR",
        ),
        testimonial(
            "Sofía Herrera",
            4,
            "Gran selección y atención al cliente. Encontré piezas exclusivas que no pude conseguir en otros lugares.",
            "SH",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|(testimonial, id)| (TestimonialId::from_i64(id), testimonial))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ids_are_sequential_from_one() {
        let ids: Vec<i64> = products().iter().map(|(id, _)| id.into_i64()).collect();

        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn only_watches_are_featured() {
        let products = products();

        assert_eq!(products.iter().filter(|(_, p)| p.featured).count(), 4);
        assert!(
            products
                .iter()
                .filter(|(_, p)| p.featured)
                .all(|(_, p)| p.category == WATCHES)
        );
    }

    #[test]
    fn testimonials_are_approved() {
        let testimonials = testimonials();

        assert_eq!(testimonials.len(), 4);
        assert!(testimonials.iter().all(|(_, t)| t.approved));
    }
}

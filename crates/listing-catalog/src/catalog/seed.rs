//! Built-in catalog data.

use super::Product;
use crate::ids::ProductId;

struct SeedProduct {
    id: u32,
    name: &'static str,
    price: i64,
    original_price: i64,
    category: &'static str,
    brand: &'static str,
    rating: f64,
    reviews: u32,
    image: &'static str,
    badge: &'static str,
}

const SEED: [SeedProduct; 6] = [
    SeedProduct {
        id: 1,
        name: "Apple iPhone 15",
        price: 79999,
        original_price: 89999,
        category: "Mobile",
        brand: "Apple",
        rating: 4.8,
        reviews: 1247,
        image: "https://m.media-amazon.com/images/I/71d7rfSl0wL._SL1500_.jpg",
        badge: "Best Seller",
    },
    SeedProduct {
        id: 2,
        name: "Samsung Galaxy S24",
        price: 69999,
        original_price: 79999,
        category: "Mobile",
        brand: "Samsung",
        rating: 4.6,
        reviews: 892,
        image: "https://m.media-amazon.com/images/I/71RVuBs3q9L._SL1500_.jpg",
        badge: "New",
    },
    SeedProduct {
        id: 3,
        name: "HP Pavilion 15 Laptop",
        price: 58999,
        original_price: 68999,
        category: "Laptop",
        brand: "HP",
        rating: 4.5,
        reviews: 654,
        image: "https://m.media-amazon.com/images/I/71cQWYVtcBL._AC_SL1500_.jpg",
        badge: "Student Choice",
    },
    SeedProduct {
        id: 4,
        name: "MacBook Air M2",
        price: 99999,
        original_price: 109999,
        category: "Laptop",
        brand: "Apple",
        rating: 4.9,
        reviews: 2103,
        image: "https://m.media-amazon.com/images/I/71vFKBpKakL._SL1500_.jpg",
        badge: "Premium",
    },
    SeedProduct {
        id: 5,
        name: "JBL Tour One M2 Headphones",
        price: 24999,
        original_price: 29999,
        category: "Accessories",
        brand: "JBL",
        rating: 4.6,
        reviews: 734,
        image: "https://m.media-amazon.com/images/I/71vFKBpKakL._SL1500_.jpg",
        badge: "Noise Cancelling",
    },
    SeedProduct {
        id: 6,
        name: "Apple Watch Series 9",
        price: 41999,
        original_price: 45999,
        category: "Accessories",
        brand: "Apple",
        rating: 4.5,
        reviews: 934,
        image: "https://m.media-amazon.com/images/I/71XMTLtZd5L._SL1500_.jpg",
        badge: "Smart Watch",
    },
];

pub(super) fn products() -> Vec<Product> {
    SEED.iter()
        .map(|s| Product {
            id: ProductId::new(s.id),
            name: s.name.to_string(),
            brand: s.brand.to_string(),
            category: s.category.to_string(),
            price: s.price,
            original_price: Some(s.original_price),
            rating: s.rating,
            reviews: s.reviews,
            image: s.image.to_string(),
            badge: Some(s.badge.to_string()),
        })
        .collect()
}

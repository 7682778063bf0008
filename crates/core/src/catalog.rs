//! Built-in product catalog.
//!
//! Products are static storefront data: loaded once, never mutated.
//! Lookup and filtering are the only operations.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub const CATEGORY_PANTS: &str = "pants";
pub const CATEGORY_SHIRTS: &str = "shirts";
pub const CATEGORY_JACKETS: &str = "jackets";
pub const CATEGORY_HATS: &str = "hats";
pub const CATEGORY_BAGS: &str = "bags";
pub const CATEGORY_JEWELRY: &str = "jewelry";
pub const CATEGORY_BACKPACKS: &str = "backpacks";
pub const CATEGORY_SNEAKERS: &str = "sneakers";
pub const CATEGORY_SPORTSWEAR: &str = "sportswear";

/// All known category identifiers, in storefront display order.
pub const ALL_CATEGORIES: &[&str] = &[
    CATEGORY_PANTS,
    CATEGORY_SHIRTS,
    CATEGORY_JACKETS,
    CATEGORY_HATS,
    CATEGORY_BAGS,
    CATEGORY_JEWELRY,
    CATEGORY_BACKPACKS,
    CATEGORY_SNEAKERS,
    CATEGORY_SPORTSWEAR,
];

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// A single catalog entry.
///
/// `id` is unique across the catalog. `image` is a publicly addressable
/// URL (site-relative for the built-in catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}

impl Product {
    fn new(id: &str, name: &str, price: f64, category: &str, image: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            image: image.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The full built-in catalog, in display order.
pub fn all_products() -> Vec<Product> {
    vec![
        Product::new("1", "Essential Straight Pants", 189.0, CATEGORY_PANTS, "/minimalist-straight-pants-grayscale.jpg"),
        Product::new("2", "Classic White Shirt", 129.0, CATEGORY_SHIRTS, "/classic-white-button-shirt-minimalist.jpg"),
        Product::new("3", "Tailored Blazer", 349.0, CATEGORY_JACKETS, "/tailored-blazer-jacket-grayscale-minimalist.jpg"),
        Product::new("4", "Wool Beanie", 59.0, CATEGORY_HATS, "/wool-beanie-hat-minimalist-grayscale.jpg"),
        Product::new("5", "Wide Leg Trousers", 219.0, CATEGORY_PANTS, "/wide-leg-trousers-pants-grayscale.jpg"),
        Product::new("6", "Oversized Tee", 89.0, CATEGORY_SHIRTS, "/oversized-t-shirt-minimalist-grayscale.jpg"),
        Product::new("7", "Wool Coat", 459.0, CATEGORY_JACKETS, "/wool-coat-jacket-minimalist-grayscale.jpg"),
        Product::new("8", "Baseball Cap", 79.0, CATEGORY_HATS, "/baseball-cap-hat-minimalist-grayscale.jpg"),
        Product::new("9", "Leather Tote Bag", 299.0, CATEGORY_BAGS, "/minimalist-leather-tote-bag-grayscale.jpg"),
        Product::new("10", "Canvas Crossbody", 149.0, CATEGORY_BAGS, "/canvas-crossbody-bag-minimalist-grayscale.jpg"),
        Product::new("11", "Structured Handbag", 389.0, CATEGORY_BAGS, "/structured-handbag-minimalist-grayscale.jpg"),
        Product::new("12", "Mini Clutch", 179.0, CATEGORY_BAGS, "/mini-clutch-bag-minimalist-grayscale.jpg"),
        Product::new("13", "Silver Chain Necklace", 129.0, CATEGORY_JEWELRY, "/silver-chain-necklace-minimalist-grayscale.jpg"),
        Product::new("14", "Geometric Earrings", 89.0, CATEGORY_JEWELRY, "/geometric-earrings-minimalist-grayscale.jpg"),
        Product::new("15", "Minimalist Ring Set", 159.0, CATEGORY_JEWELRY, "/minimalist-ring-set-grayscale.jpg"),
        Product::new("16", "Classic Watch", 249.0, CATEGORY_JEWELRY, "/classic-minimalist-watch-grayscale.jpg"),
        Product::new("17", "Canvas Backpack", 199.0, CATEGORY_BACKPACKS, "/canvas-backpack-minimalist-grayscale.jpg"),
        Product::new("18", "Leather Daypack", 329.0, CATEGORY_BACKPACKS, "/leather-daypack-backpack-minimalist-grayscale.jpg"),
        Product::new("19", "Tech Backpack", 279.0, CATEGORY_BACKPACKS, "/tech-backpack-minimalist-grayscale.jpg"),
        Product::new("20", "Mini Backpack", 149.0, CATEGORY_BACKPACKS, "/mini-backpack-minimalist-grayscale.jpg"),
        Product::new("21", "Classic White Sneakers", 189.0, CATEGORY_SNEAKERS, "/white-sneakers-minimalist-grayscale.jpg"),
        Product::new("22", "High-Top Canvas", 159.0, CATEGORY_SNEAKERS, "/high-top-canvas-sneakers-minimalist-grayscale.jpg"),
        Product::new("23", "Running Shoes", 229.0, CATEGORY_SNEAKERS, "/running-shoes-minimalist-grayscale.jpg"),
        Product::new("24", "Slip-On Sneakers", 139.0, CATEGORY_SNEAKERS, "/placeholder.svg?height=400&width=300"),
        Product::new("25", "Athletic Hoodie", 149.0, CATEGORY_SPORTSWEAR, "/placeholder.svg?height=400&width=300"),
        Product::new("26", "Performance Leggings", 89.0, CATEGORY_SPORTSWEAR, "/placeholder.svg?height=400&width=300"),
        Product::new("27", "Training Shorts", 69.0, CATEGORY_SPORTSWEAR, "/placeholder.svg?height=400&width=300"),
        Product::new("28", "Sports Bra", 59.0, CATEGORY_SPORTSWEAR, "/placeholder.svg?height=400&width=300"),
    ]
}

/// Products belonging to a single category, preserving catalog order.
pub fn products_in_category(category: &str) -> Vec<Product> {
    all_products()
        .into_iter()
        .filter(|p| p.category == category)
        .collect()
}

/// Look up a product by its unique id.
pub fn find_product(id: &str) -> Option<Product> {
    all_products().into_iter().find(|p| p.id == id)
}

/// Look up a product by its display name (used to re-attach snapshots to
/// results when only names were transmitted).
pub fn find_product_by_name(name: &str) -> Option<Product> {
    all_products().into_iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let products = all_products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn every_product_has_a_known_category() {
        for p in all_products() {
            assert!(
                ALL_CATEGORIES.contains(&p.category.as_str()),
                "unknown category {} on product {}",
                p.category,
                p.id
            );
        }
    }

    #[test]
    fn category_filter_returns_only_that_category() {
        let hats = products_in_category(CATEGORY_HATS);
        assert!(!hats.is_empty());
        assert!(hats.iter().all(|p| p.category == CATEGORY_HATS));
    }

    #[test]
    fn find_product_by_id_and_name() {
        let shirt = find_product("2").unwrap();
        assert_eq!(shirt.name, "Classic White Shirt");
        assert_eq!(find_product_by_name("Wool Beanie").unwrap().id, "4");
        assert!(find_product("999").is_none());
    }
}

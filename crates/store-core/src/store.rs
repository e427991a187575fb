//! # Product Store
//!
//! Ordered, process-lifetime collection of products.
//! Products are only ever appended; there is no update or delete.

use crate::error::{StoreError, StoreResult};
use crate::params::parse_threshold;
use crate::product::Product;

/// In-memory product store
#[derive(Debug, Clone, Default)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Create a store holding the three sample products.
    ///
    /// Expiration is the time of seeding.
    pub fn seeded() -> Self {
        let sample = |id: &str, name: &str, price: f64| {
            Product::new(id, name, price)
                .with_quantity(10)
                .with_code_value("123456789")
                .with_published(true)
        };

        Self {
            products: vec![
                sample("1", "Coco Cola", 10.5),
                sample("2", "Pepsito", 8.5),
                sample("3", "Fantastica", 5.5),
            ],
        }
    }

    /// All products, in insertion order
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Append a product. Identifiers are not checked for uniqueness.
    pub fn append(&mut self, product: Product) {
        self.products.push(product);
    }

    /// First product with the given identifier
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Store::find_by_id`], but a miss is a [`StoreError::ProductNotFound`]
    pub fn get(&self, id: &str) -> StoreResult<&Product> {
        self.find_by_id(id).ok_or_else(|| StoreError::ProductNotFound { id: id.to_string() })
    }

    /// Products priced strictly above `threshold`, in insertion order
    pub fn priced_above(&self, threshold: f64) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.is_priced_above(threshold))
            .cloned()
            .collect()
    }

    /// Parse `raw` as a price threshold and filter by it.
    ///
    /// Literals that overflow `f64` are rejected like any other garbage.
    pub fn search_by_price(&self, raw: &str) -> StoreResult<Vec<Product>> {
        let threshold = parse_threshold(raw).ok_or_else(|| StoreError::InvalidPriceParameter {
            value: raw.to_string(),
        })?;
        Ok(self.priced_above(threshold))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = Store::seeded();
        let ids: Vec<_> = store.list().iter().map(|p| p.id.as_str()).collect();
        let prices: Vec<_> = store.list().iter().map(|p| p.price).collect();

        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(prices, vec![10.5, 8.5, 5.5]);
        assert!(store.list().iter().all(|p| p.quantity == 10 && p.is_published));
    }

    #[test]
    fn test_search_by_price() {
        let store = Store::seeded();

        let above_nine = store.search_by_price("9").unwrap();
        assert_eq!(above_nine.len(), 1);
        assert_eq!(above_nine[0].name, "Coco Cola");

        let above_five = store.search_by_price("5").unwrap();
        let names: Vec<_> = above_five.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Coco Cola", "Pepsito", "Fantastica"]);

        assert!(store.search_by_price("100").unwrap().is_empty());
    }

    #[test]
    fn test_search_by_price_rejects_garbage() {
        let store = Store::seeded();
        assert_eq!(
            store.search_by_price("abc"),
            Err(StoreError::InvalidPriceParameter {
                value: "abc".into()
            })
        );
        assert!(store.search_by_price("1e400").is_err());
        assert!(store.search_by_price("").is_err());
    }

    #[test]
    fn test_search_by_price_infinity_literals() {
        let store = Store::seeded();
        assert!(store.search_by_price("Inf").unwrap().is_empty());
        assert_eq!(store.search_by_price("-Inf").unwrap().len(), 3);
    }

    #[test]
    fn test_append_allows_duplicate_ids() {
        let mut store = Store::seeded();
        store.append(Product::new("1", "Coco Cola Zero", 11.0));

        assert_eq!(store.len(), 4);
        // first match wins
        assert_eq!(store.find_by_id("1").unwrap().name, "Coco Cola");
        assert_eq!(store.list().last().unwrap().name, "Coco Cola Zero");
    }

    #[test]
    fn test_get_missing_product() {
        let store = Store::seeded();
        assert!(store.find_by_id("999").is_none());
        assert_eq!(
            store.get("999").unwrap_err(),
            StoreError::ProductNotFound { id: "999".into() }
        );
    }

    #[test]
    fn test_empty_store() {
        let store = Store::new();
        assert!(store.is_empty());
        assert!(store.priced_above(0.0).is_empty());
    }
}

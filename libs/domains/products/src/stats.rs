use std::collections::BTreeMap;

use crate::models::{Product, ProductStats};

impl ProductStats {
    /// Aggregate over every product given, ignoring any list filters
    pub fn from_products(products: &[Product]) -> Self {
        let total_products = products.len();
        let in_stock = products.iter().filter(|p| p.in_stock).count();

        let mut categories = BTreeMap::new();
        for product in products {
            *categories.entry(product.category.clone()).or_insert(0) += 1;
        }

        let average_price = if total_products == 0 {
            0.0
        } else {
            products.iter().map(|p| p.price).sum::<f64>() / total_products as f64
        };

        Self {
            total_products,
            in_stock,
            out_of_stock: total_products - in_stock,
            categories,
            average_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_products;

    #[test]
    fn test_seed_stats() {
        let stats = ProductStats::from_products(&seed_products());
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.in_stock, 2);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.categories.get("Electronics"), Some(&2));
        assert_eq!(stats.categories.get("Home"), Some(&1));
        assert!((stats.average_price - (999.99 + 12.99 + 29.99) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_store() {
        let stats = ProductStats::from_products(&[]);
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.average_price, 0.0);
        assert!(stats.categories.is_empty());
    }

    #[test]
    fn test_categories_keep_stored_case() {
        let mut products = seed_products();
        products[1].category = "electronics".to_string();
        let stats = ProductStats::from_products(&products);
        assert_eq!(stats.categories.get("Electronics"), Some(&2));
        assert_eq!(stats.categories.get("electronics"), Some(&1));
    }
}

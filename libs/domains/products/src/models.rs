use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

/// Product entity as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier, assigned at creation
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price, never negative
    pub price: f64,
    /// Free-form category, matched case-insensitively when filtering
    pub category: String,
    /// Whether the product can currently be ordered
    pub in_stock: bool,
}

/// Validated create/update payload: every field except `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[schema(example = "Desk Lamp")]
    pub name: String,
    #[schema(example = "LED lamp with adjustable arm")]
    pub description: String,
    #[schema(example = 34.5, minimum = 0)]
    pub price: f64,
    #[schema(example = "Home")]
    pub category: String,
    pub in_stock: bool,
}

/// Raw list query parameters.
///
/// Kept as strings so malformed numbers fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Exact category, case-insensitive
    pub category: Option<String>,
    /// "true" keeps in-stock products, any other value keeps out-of-stock ones
    pub in_stock: Option<String>,
    /// Case-insensitive substring of name or description
    pub search: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
}

/// Pagination metadata for a list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_products: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page of filtered products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

/// Aggregates over the whole, unfiltered store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    /// Record count per category, keyed by the category as stored
    pub categories: BTreeMap<String, usize>,
    /// Mean price, 0 for an empty store
    pub average_price: f64,
}

impl Product {
    /// Build a product from a validated payload and a freshly generated id
    pub fn new(id: impl Into<String>, input: ProductInput) -> Self {
        let input = input.trimmed();
        Self {
            id: id.into(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }

    /// Replace every field except `id`
    pub fn replace_with(&self, input: ProductInput) -> Self {
        Self::new(self.id.clone(), input)
    }
}

impl ProductInput {
    /// Copy with surrounding whitespace stripped from every string field
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            category: self.category.trim().to_string(),
            in_stock: self.in_stock,
        }
    }
}

/// Records the store starts with on every process start
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 999.99,
            category: "Electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Coffee Mug".to_string(),
            description: "Ceramic coffee mug, 350ml".to_string(),
            price: 12.99,
            category: "Home".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Wireless Mouse".to_string(),
            description: "Ergonomic wireless mouse with USB receiver".to_string(),
            price: 29.99,
            category: "Electronics".to_string(),
            in_stock: false,
        },
    ]
}

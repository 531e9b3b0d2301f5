//! Filtering, search and pagination for the list endpoint.

use std::num::IntErrorKind;

use crate::models::{Pagination, Product, ProductPage, ProductQuery};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Normalized list parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    /// Lowercased category to match exactly
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    /// Lowercased search needle
    pub search: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            category: None,
            in_stock: None,
            search: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Leading-integer parse: `"3"`, `"+3"` and `"3abc"` give 3; absent, empty,
/// non-numeric, negative and zero give `default`. Values too large for
/// `usize` clamp to `usize::MAX`.
pub fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    let trimmed = raw.unwrap_or_default().trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();

    match digits.parse::<usize>() {
        Ok(0) => default,
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Err(_) => default,
    }
}

impl FromIterator<(String, String)> for ProductQuery {
    /// Build from raw query pairs. A repeated key keeps its first value;
    /// unknown keys are ignored.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = ProductQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut query.category,
                "inStock" => &mut query.in_stock,
                "search" => &mut query.search,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<ProductQuery> for ListParams {
    fn from(query: ProductQuery) -> Self {
        Self {
            category: non_empty(query.category).map(|c| c.to_lowercase()),
            in_stock: non_empty(query.in_stock).map(|v| v == "true"),
            search: non_empty(query.search).map(|s| s.to_lowercase()),
            page: parse_positive(query.page.as_deref(), DEFAULT_PAGE),
            limit: parse_positive(query.limit.as_deref(), DEFAULT_LIMIT),
        }
    }
}

impl ListParams {
    /// Conjunction of the category, stock and search predicates
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category.to_lowercase() != *category {
                return false;
            }
        }
        if let Some(in_stock) = self.in_stock {
            if product.in_stock != in_stock {
                return false;
            }
        }
        if let Some(needle) = &self.search {
            let in_name = product.name.to_lowercase().contains(needle.as_str());
            let in_description = product.description.to_lowercase().contains(needle.as_str());
            if !in_name && !in_description {
                return false;
            }
        }
        true
    }

    /// Filter `products` and cut out the requested page.
    ///
    /// A window past the end yields an empty page, never an error.
    pub fn apply(&self, products: Vec<Product>) -> ProductPage {
        let filtered: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        let total = filtered.len();

        let start = (self.page - 1).saturating_mul(self.limit);
        let end = start.saturating_add(self.limit);

        let products = filtered
            .into_iter()
            .skip(start)
            .take(self.limit)
            .collect();

        ProductPage {
            products,
            pagination: Pagination {
                current_page: self.page,
                total_pages: total.div_ceil(self.limit),
                total_products: total,
                has_next: end < total,
                has_prev: self.page > 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_products;

    fn catalog(n: usize) -> Vec<Product> {
        (1..=n)
            .map(|i| Product {
                id: i.to_string(),
                name: format!("Item {}", i),
                description: "Generic".to_string(),
                price: i as f64,
                category: if i % 2 == 0 { "Even" } else { "Odd" }.to_string(),
                in_stock: i % 3 != 0,
            })
            .collect()
    }

    fn query(pairs: &[(&str, &str)]) -> ListParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<ProductQuery>()
            .into()
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive(None, 10), 10);
        assert_eq!(parse_positive(Some(""), 10), 10);
        assert_eq!(parse_positive(Some("abc"), 10), 10);
        assert_eq!(parse_positive(Some("0"), 10), 10);
        assert_eq!(parse_positive(Some("-3"), 10), 10);
        assert_eq!(parse_positive(Some("7"), 10), 7);
        assert_eq!(parse_positive(Some("2abc"), 10), 2);
        assert_eq!(parse_positive(Some("2.9"), 10), 2);
        assert_eq!(parse_positive(Some("+2"), 10), 2);
        assert_eq!(parse_positive(Some(" +7x"), 10), 7);
        assert_eq!(parse_positive(Some("+"), 10), 10);
        assert_eq!(parse_positive(Some("+-2"), 10), 10);
    }

    #[test]
    fn test_parse_positive_clamps_overflow() {
        assert_eq!(
            parse_positive(Some("99999999999999999999999"), 10),
            usize::MAX
        );

        let params = query(&[("limit", "99999999999999999999999")]);
        let page = params.apply(seed_products());
        assert_eq!(page.products.len(), 3);
        assert_eq!(page.pagination.total_pages, 1);
        assert!(!page.pagination.has_next);
    }

    #[test]
    fn test_repeated_keys_keep_first_value() {
        let params = query(&[
            ("page", "2"),
            ("page", "5"),
            ("category", "Home"),
            ("category", "Electronics"),
            ("sort", "price"),
        ]);
        assert_eq!(params.page, 2);
        assert_eq!(params.category.as_deref(), Some("home"));
    }

    #[test]
    fn test_defaults() {
        let params = query(&[]);
        assert_eq!(params, ListParams::default());
    }

    #[test]
    fn test_category_is_case_insensitive() {
        let page = query(&[("category", "electronics")]).apply(seed_products());
        assert_eq!(page.products.len(), 2);
        assert!(page.products.iter().all(|p| p.category == "Electronics"));
        assert_eq!(page.pagination.total_products, 2);
    }

    #[test]
    fn test_in_stock_filter() {
        let in_stock = query(&[("inStock", "true")]).apply(seed_products());
        assert_eq!(in_stock.products.len(), 2);

        let out_of_stock = query(&[("inStock", "yes")]).apply(seed_products());
        assert_eq!(out_of_stock.products.len(), 1);
        assert_eq!(out_of_stock.products[0].id, "3");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let page = query(&[("category", "Electronics"), ("inStock", "true")]).apply(seed_products());
        let ids: Vec<_> = page.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1"]);
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let by_name = query(&[("search", "MUG")]).apply(seed_products());
        assert_eq!(by_name.products[0].id, "2");

        let by_description = query(&[("search", "usb receiver")]).apply(seed_products());
        assert_eq!(by_description.products[0].id, "3");

        let none = query(&[("search", "toaster")]).apply(seed_products());
        assert!(none.products.is_empty());
        assert_eq!(none.pagination.total_pages, 0);
    }

    #[test]
    fn test_pagination_window() {
        let page = query(&[("page", "2"), ("limit", "10")]).apply(catalog(25));
        assert_eq!(page.products.len(), 10);
        assert_eq!(page.products[0].id, "11");
        assert_eq!(
            page.pagination,
            Pagination {
                current_page: 2,
                total_pages: 3,
                total_products: 25,
                has_next: true,
                has_prev: true,
            }
        );

        let last = query(&[("page", "3"), ("limit", "10")]).apply(catalog(25));
        assert_eq!(last.products.len(), 5);
        assert!(!last.pagination.has_next);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = query(&[("page", "9"), ("limit", "5")]).apply(catalog(12));
        assert!(page.products.is_empty());
        assert_eq!(page.pagination.total_pages, 3);
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[test]
    fn test_pagination_properties_hold() {
        for total in 0..15 {
            for limit in 1..6 {
                for page in 1..6 {
                    let params = ListParams {
                        page,
                        limit,
                        ..Default::default()
                    };
                    let p = params.apply(catalog(total)).pagination;
                    assert_eq!(p.total_pages, total.div_ceil(limit));
                    assert_eq!(p.has_next, page * limit < total);
                    assert_eq!(p.has_prev, page > 1);
                }
            }
        }
    }
}

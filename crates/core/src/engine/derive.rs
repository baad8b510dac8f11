//! # Derive - Filter and Sort
//!
//! Produces the displayed subset of the collection. Pure: the collection is
//! borrowed and never reordered in place.

use super::sort::{SortKey, SortOrder};
use crate::models::Product;

/// Whether a product matches the search box
///
/// Name matches case-insensitively, id matches on its printed form as typed.
pub fn matches_query(product: &Product, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    product
        .name
        .to_lowercase()
        .contains(&query.to_lowercase())
        || product.id.to_string().contains(query)
}

/// Filter by `query`, then stable-sort by `key` in `order`
pub fn derive<'a>(
    products: &'a [Product],
    query: &str,
    key: SortKey,
    order: SortOrder,
) -> Vec<&'a Product> {
    let mut subset: Vec<&Product> = products
        .iter()
        .filter(|p| matches_query(p, query))
        .collect();

    // sort_by is stable, and reversing an Equal ordering keeps it Equal
    subset.sort_by(|a, b| order.apply(key.compare(a, b)));
    subset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductId;

    fn product(id: u64, name: &str, selling_price: f64) -> Product {
        Product {
            id: ProductId::Number(id),
            name: name.to_string(),
            description: String::new(),
            allergen_info: String::new(),
            cooking_instruction: String::new(),
            cost_price: 0.0,
            selling_price,
            product_image: String::new(),
        }
    }

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Tea", 5.0),
            product(2, "Coffee", 3.0),
            product(12, "Green Tea", 3.0),
            product(21, "water", 1.0),
        ]
    }

    #[test]
    fn test_price_sort_example() {
        let products = vec![product(1, "Tea", 5.0), product(2, "Coffee", 3.0)];
        let view = derive(&products, "", SortKey::SellingPrice, SortOrder::Ascending);
        assert_eq!(names(&view), vec!["Coffee", "Tea"]);
    }

    #[test]
    fn test_search_example() {
        let products = vec![product(1, "Tea", 5.0), product(2, "Coffee", 3.0)];
        let view = derive(&products, "te", SortKey::Id, SortOrder::Ascending);
        assert_eq!(names(&view), vec!["Tea"]);
    }

    #[test]
    fn test_empty_query_is_permutation() {
        let products = sample();
        for key in SortKey::all() {
            for order in [SortOrder::Ascending, SortOrder::Descending] {
                for query in ["", "   "] {
                    let view = derive(&products, query, key, order);
                    assert_eq!(view.len(), products.len());
                    for p in &products {
                        assert!(view.iter().any(|v| *v == p));
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_result_matches() {
        let products = sample();
        for query in ["te", "TEA", "1", "2", "zzz", "Wat"] {
            let view = derive(&products, query, SortKey::Name, SortOrder::Ascending);
            for p in &view {
                assert!(
                    p.name.to_lowercase().contains(&query.to_lowercase())
                        || p.id.to_string().contains(query)
                );
            }
        }
    }

    #[test]
    fn test_id_substring_match() {
        let products = sample();
        let view = derive(&products, "1", SortKey::Id, SortOrder::Ascending);
        let ids: Vec<String> = view.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "12", "21"]);
    }

    #[test]
    fn test_stable_for_equal_keys_both_directions() {
        let products = sample();

        let asc = derive(&products, "", SortKey::SellingPrice, SortOrder::Ascending);
        assert_eq!(names(&asc), vec!["water", "Coffee", "Green Tea", "Tea"]);

        let desc = derive(&products, "", SortKey::SellingPrice, SortOrder::Descending);
        assert_eq!(names(&desc), vec!["Tea", "Coffee", "Green Tea", "water"]);
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let products = sample();
        let view = derive(&products, "", SortKey::Name, SortOrder::Ascending);
        assert_eq!(names(&view), vec!["Coffee", "Green Tea", "Tea", "water"]);
    }

    #[test]
    fn test_unparsed_price_sorts_after_numbers() {
        let products = vec![
            product(1, "Tea", 5.0),
            product(2, "Coffee", f64::NAN),
            product(3, "Soup", 4.0),
        ];
        let asc = derive(&products, "", SortKey::SellingPrice, SortOrder::Ascending);
        assert_eq!(names(&asc), vec!["Soup", "Tea", "Coffee"]);

        let desc = derive(&products, "", SortKey::SellingPrice, SortOrder::Descending);
        assert_eq!(names(&desc), vec!["Coffee", "Tea", "Soup"]);
    }

    #[test]
    fn test_collection_is_untouched() {
        let products = sample();
        let before = products.clone();
        let _ = derive(&products, "t", SortKey::Name, SortOrder::Descending);
        assert_eq!(products, before);
    }
}

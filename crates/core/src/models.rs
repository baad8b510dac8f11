//! # Catalog Models
//!
//! Wire types shared by the catalog view model and the remote product store.
//!
//! The remote store is not strict about its JSON: ids come back as numbers of
//! any shape or as strings, prices as numbers or free text, and optional text
//! fields may be missing or `null`. These types absorb that once so the rest
//! of the crate works with plain Rust values. A single odd row never fails the
//! whole collection.

use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Server-assigned product identity
///
/// Ids are opaque: any JSON number or string is accepted and printed back the
/// way the store sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    /// Negative or fractional numeric id
    Decimal(serde_json::Number),
    Text(String),
}

impl ProductId {
    fn numeric(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n as f64),
            Self::Decimal(n) => n.as_f64(),
            Self::Text(_) => None,
        }
    }

    /// Total order used by the id sort key.
    ///
    /// Numeric ids compare numerically and sort before textual ids.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => match (self.numeric(), other.numeric()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Decimal(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A product as owned by the remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub allergen_info: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cooking_instruction: String,
    #[serde(default, deserialize_with = "lenient_price")]
    pub cost_price: f64,
    #[serde(default, deserialize_with = "lenient_price")]
    pub selling_price: f64,
    #[serde(rename = "productImage", default, deserialize_with = "lenient_text")]
    pub product_image: String,
}

/// Body of `POST /api/products`
///
/// Same fields as [`Product`] minus the id, which the store assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub allergen_info: String,
    pub cooking_instruction: String,
    #[serde(deserialize_with = "lenient_price")]
    pub cost_price: f64,
    #[serde(deserialize_with = "lenient_price")]
    pub selling_price: f64,
    #[serde(rename = "productImage")]
    pub product_image: String,
}

impl CreateProductRequest {
    /// Attach a store-assigned id
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            allergen_info: self.allergen_info,
            cooking_instruction: self.cooking_instruction,
            cost_price: self.cost_price,
            selling_price: self.selling_price,
            product_image: self.product_image,
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

/// Prices that are not numbers decode to NaN, which sorts above every number
fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawPrice>::deserialize(deserializer)? {
        None => 0.0,
        Some(RawPrice::Number(n)) => n,
        Some(RawPrice::Text(s)) if s.trim().is_empty() => 0.0,
        Some(RawPrice::Text(s)) => s.trim().parse::<f64>().unwrap_or_else(|_| {
            tracing::warn!(price = %s, "Unparseable price, treating as NaN");
            f64::NAN
        }),
    })
}

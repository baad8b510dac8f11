//! # Product Draft
//!
//! The unsaved form behind the "Add Product" surface. Fields hold exactly what
//! the user typed; [`ProductDraft::validate`] turns a complete draft into a
//! create request.

use crate::error::ValidationError;
use crate::models::CreateProductRequest;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One input of the draft form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    Description,
    AllergenInfo,
    CookingInstruction,
    CostPrice,
    SellingPrice,
    #[serde(rename = "productImage")]
    ProductImage,
}

impl DraftField {
    pub fn all() -> [DraftField; 7] {
        [
            DraftField::Name,
            DraftField::Description,
            DraftField::AllergenInfo,
            DraftField::CookingInstruction,
            DraftField::CostPrice,
            DraftField::SellingPrice,
            DraftField::ProductImage,
        ]
    }

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::AllergenInfo => "allergen_info",
            Self::CookingInstruction => "cooking_instruction",
            Self::CostPrice => "cost_price",
            Self::SellingPrice => "selling_price",
            Self::ProductImage => "productImage",
        }
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Product Name",
            Self::Description => "Product Description",
            Self::AllergenInfo => "Product Allergen Info",
            Self::CookingInstruction => "Cooking Instruction",
            Self::CostPrice => "Cost Price",
            Self::SellingPrice => "Selling Price",
            Self::ProductImage => "Product Image",
        }
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown draft field {:?}", s))
    }
}

/// Text of every input in the create form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub allergen_info: String,
    #[serde(default)]
    pub cooking_instruction: String,
    #[serde(default)]
    pub cost_price: String,
    #[serde(default)]
    pub selling_price: String,
    #[serde(rename = "productImage", default)]
    pub product_image: String,
}

impl ProductDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::AllergenInfo => &self.allergen_info,
            DraftField::CookingInstruction => &self.cooking_instruction,
            DraftField::CostPrice => &self.cost_price,
            DraftField::SellingPrice => &self.selling_price,
            DraftField::ProductImage => &self.product_image,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Description => &mut self.description,
            DraftField::AllergenInfo => &mut self.allergen_info,
            DraftField::CookingInstruction => &mut self.cooking_instruction,
            DraftField::CostPrice => &mut self.cost_price,
            DraftField::SellingPrice => &mut self.selling_price,
            DraftField::ProductImage => &mut self.product_image,
        };
        *slot = value.into();
    }

    /// Builder-style setter
    pub fn with(mut self, field: DraftField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Fields that are empty or whitespace
    pub fn missing_fields(&self) -> Vec<&'static str> {
        DraftField::all()
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .map(|f| f.as_str())
            .collect()
    }

    /// Check the draft and build the create request
    pub fn validate(&self) -> Result<CreateProductRequest, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }

        Ok(CreateProductRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            allergen_info: self.allergen_info.trim().to_string(),
            cooking_instruction: self.cooking_instruction.trim().to_string(),
            cost_price: parse_price(DraftField::CostPrice, &self.cost_price)?,
            selling_price: parse_price(DraftField::SellingPrice, &self.selling_price)?,
            product_image: self.product_image.trim().to_string(),
        })
    }
}

fn parse_price(field: DraftField, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::InvalidPrice {
            field: field.label(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ProductDraft {
        ProductDraft::new()
            .with(DraftField::Name, "Tea")
            .with(DraftField::Description, "Loose leaf")
            .with(DraftField::AllergenInfo, "None")
            .with(DraftField::CookingInstruction, "Steep 3 minutes")
            .with(DraftField::CostPrice, "1.25")
            .with(DraftField::SellingPrice, "5")
            .with(DraftField::ProductImage, "https://img.example/tea.png")
    }

    #[test]
    fn test_complete_draft_validates() {
        let request = complete_draft().validate().unwrap();
        assert_eq!(request.name, "Tea");
        assert_eq!(request.cost_price, 1.25);
        assert_eq!(request.selling_price, 5.0);
    }

    #[test]
    fn test_every_empty_field_is_rejected() {
        for field in DraftField::all() {
            let draft = complete_draft().with(field, "  ");
            match draft.validate() {
                Err(ValidationError::MissingFields { fields }) => {
                    assert_eq!(fields, vec![field.as_str()]);
                }
                other => panic!("expected missing {:?}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_empty_draft_lists_all_fields() {
        let err = ProductDraft::new().validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                fields: DraftField::all().iter().map(|f| f.as_str()).collect()
            }
        );
    }

    #[test]
    fn test_non_numeric_price() {
        let err = complete_draft()
            .with(DraftField::SellingPrice, "five")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidPrice {
                field: "Selling Price",
                ..
            }
        ));
        assert_eq!(err.user_message(), "Selling Price must be a number, got \"five\"");
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("productImage".parse::<DraftField>().unwrap(), DraftField::ProductImage);
        assert_eq!("cost_price".parse::<DraftField>().unwrap(), DraftField::CostPrice);
        assert!("colour".parse::<DraftField>().is_err());
    }
}

//! # Catalog State
//!
//! Everything the product list view holds: the collection mirrored from the
//! remote store and the transient inputs (search box, sort buttons, the
//! create form). Changes go through [`CatalogState::apply`], which takes the
//! state by value and returns the next one.

use super::draft::{DraftField, ProductDraft};
use crate::engine::{self, SortKey, SortOrder, SortState};
use crate::models::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Something that happened to the view
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// Search box edited
    SetQuery(String),
    /// Sort button pressed
    ToggleSort(SortKey),
    /// "Add Product" opened the creation surface with an empty draft
    OpenDraft,
    /// Creation surface dismissed; the draft is discarded
    CloseDraft,
    /// One form input edited
    EditDraft(DraftField, String),
    /// Collection fetched from the store
    ProductsLoaded(Vec<Product>),
    /// Collection fetch failed
    LoadFailed,
    /// Store accepted the draft and returned the saved product
    ProductCreated(Product),
    /// Draft failed validation; the message is shown inline
    DraftRejected(String),
    /// Create request failed on the wire
    SubmitFailed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    /// Authoritative collection, in the order the store returned it
    pub products: Vec<Product>,
    /// Search box text
    pub query: String,
    pub sort: SortState,
    /// Open creation surface, if any
    pub draft: Option<ProductDraft>,
    /// Inline message on the creation surface
    pub validation_error: Option<String>,
    /// When the collection was last fetched successfully
    pub loaded_at: Option<DateTime<Utc>>,
    /// Whether a load has been attempted
    pub load_attempted: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with an already-fetched collection
    pub fn with_products(products: Vec<Product>) -> Self {
        Self::new().apply(CatalogAction::ProductsLoaded(products))
    }

    /// Fold one action into the state
    pub fn apply(mut self, action: CatalogAction) -> Self {
        match action {
            CatalogAction::SetQuery(query) => {
                self.query = query;
            }
            CatalogAction::ToggleSort(key) => {
                self.sort = self.sort.toggled(key);
            }
            CatalogAction::OpenDraft => {
                self.draft = Some(ProductDraft::new());
                self.validation_error = None;
            }
            CatalogAction::CloseDraft => {
                self.close_draft();
            }
            CatalogAction::EditDraft(field, value) => {
                // Edits only land while the form is open
                if let Some(draft) = self.draft.as_mut() {
                    draft.set(field, value);
                }
            }
            CatalogAction::ProductsLoaded(products) => {
                self.products = products;
                self.loaded_at = Some(Utc::now());
                self.load_attempted = true;
            }
            CatalogAction::LoadFailed => {
                self.products.clear();
                self.loaded_at = None;
                self.load_attempted = true;
            }
            CatalogAction::ProductCreated(product) => {
                self.products.push(product);
                self.close_draft();
            }
            CatalogAction::DraftRejected(message) => {
                self.validation_error = Some(message);
            }
            CatalogAction::SubmitFailed => {
                self.close_draft();
            }
        }
        self
    }

    fn close_draft(&mut self) {
        self.draft = None;
        self.validation_error = None;
    }

    /// Whether the creation surface is showing
    pub fn is_draft_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort.key
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort.order
    }

    /// Displayed subset for the current inputs
    pub fn view(&self) -> Vec<&Product> {
        engine::derive(&self.products, &self.query, self.sort.key, self.sort.order)
    }
}

//! # Catalog Session
//!
//! Pairs a [`CatalogState`] with a [`ProductStore`]. Network calls are awaited
//! and their outcome is folded into the state afterwards, so the state only
//! ever changes through [`CatalogState::apply`].

use crate::config::CatalogConfig;
use crate::engine::SortKey;
use crate::error::{CatalogError, Result};
use crate::models::Product;
use crate::state::{CatalogAction, CatalogState, DraftField};
use crate::store::ProductStore;

pub struct Catalog<S: ProductStore> {
    store: S,
    state: CatalogState,
    presort_by_price: bool,
}

impl<S: ProductStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: CatalogState::new(),
            presort_by_price: false,
        }
    }

    /// Session honouring the load options in `config`
    pub fn with_config(store: S, config: &CatalogConfig) -> Self {
        Self {
            presort_by_price: config.presort_by_price,
            ..Self::new(store)
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Displayed subset for the current search and sort inputs
    pub fn view(&self) -> Vec<&Product> {
        self.state.view()
    }

    /// Apply a UI action that needs no network call
    pub fn dispatch(&mut self, action: CatalogAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.dispatch(CatalogAction::SetQuery(query.into()));
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.dispatch(CatalogAction::ToggleSort(key));
    }

    pub fn open_draft(&mut self) {
        self.dispatch(CatalogAction::OpenDraft);
    }

    pub fn close_draft(&mut self) {
        self.dispatch(CatalogAction::CloseDraft);
    }

    pub fn edit_draft(&mut self, field: DraftField, value: impl Into<String>) {
        self.dispatch(CatalogAction::EditDraft(field, value.into()));
    }

    /// First presentation of the view: load unless a load was already tried
    pub async fn present(&mut self) -> &[Product] {
        if !self.state.load_attempted {
            // Failure is already logged and leaves the list empty
            let _ = self.load().await;
        }
        &self.state.products
    }

    /// Fetch the collection from the store, replacing the local copy
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) -> Result<&[Product]> {
        match self.store.list().await {
            Ok(mut products) => {
                if self.presort_by_price {
                    products.sort_by(|a, b| a.selling_price.total_cmp(&b.selling_price));
                }
                tracing::info!(count = products.len(), "Catalog loaded");
                self.dispatch(CatalogAction::ProductsLoaded(products));
                Ok(&self.state.products)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching products");
                self.dispatch(CatalogAction::LoadFailed);
                Err(CatalogError::Request(e))
            }
        }
    }

    /// Validate and send the open draft
    ///
    /// A draft that fails validation stays open with its message set and no
    /// request is made. Once a request is sent the form closes whatever the
    /// outcome; only a successful response is added to the collection.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<Product> {
        let draft = self.state.draft.clone().unwrap_or_default();

        let request = match draft.validate() {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Draft rejected");
                self.dispatch(CatalogAction::DraftRejected(e.user_message()));
                return Err(CatalogError::Validation(e));
            }
        };

        match self.store.create(&request).await {
            Ok(product) => {
                tracing::info!(id = %product.id, name = %product.name, "Product added");
                self.dispatch(CatalogAction::ProductCreated(product.clone()));
                Ok(product)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error adding product");
                self.dispatch(CatalogAction::SubmitFailed);
                Err(CatalogError::Request(e))
            }
        }
    }
}

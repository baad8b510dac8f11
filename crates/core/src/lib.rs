//! # Catalog Core
//!
//! View model for the product catalog - the product collection, the search
//! and sort engine, the create-product form, and the client for the remote
//! product store.
//!
//! ## Architecture
//!
//! - `models` - Product wire types
//! - `engine/` - Pure filter/sort over the collection
//! - `state/` - Catalog state, the create-form draft, and the update function
//! - `store/` - `ProductStore` seam with HTTP and in-memory implementations
//! - `catalog` - Session tying state to a store (load, submit)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_core::{Catalog, CatalogConfig, HttpProductStore, SortKey};
//!
//! let config = CatalogConfig::from_env()?;
//! let mut catalog = Catalog::with_config(HttpProductStore::new(&config)?, &config);
//! catalog.present().await;
//! catalog.set_query("tea");
//! catalog.toggle_sort(SortKey::SellingPrice);
//! for product in catalog.view() {
//!     println!("{} {}", product.id, product.name);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod state;
pub mod store;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use engine::{derive, SortKey, SortOrder, SortState};
pub use error::{CatalogError, RequestError, ValidationError};
pub use models::{CreateProductRequest, Product, ProductId};
pub use state::{CatalogAction, CatalogState, DraftField, ProductDraft};
pub use store::{HttpProductStore, InMemoryProductStore, ProductStore};

//! # Product Store
//!
//! The remote service that owns the canonical product list and assigns ids.
//!
//! ## Architecture
//!
//! ```text
//!              Catalog (view state)
//!                    ↓
//!              dyn ProductStore
//!                    ↓
//!   HttpProductStore (remote API) or InMemoryProductStore (local ids)
//! ```

pub mod http;
pub mod memory;

pub use http::HttpProductStore;
pub use memory::InMemoryProductStore;

use crate::error::RequestError;
use crate::models::{CreateProductRequest, Product};
use async_trait::async_trait;

/// List and create operations of the product API
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// `GET /api/products`
    async fn list(&self) -> Result<Vec<Product>, RequestError>;

    /// `POST /api/products`; the returned product carries the assigned id
    async fn create(&self, request: &CreateProductRequest) -> Result<Product, RequestError>;
}

#[async_trait]
impl<S: ProductStore + ?Sized> ProductStore for std::sync::Arc<S> {
    async fn list(&self) -> Result<Vec<Product>, RequestError> {
        (**self).list().await
    }

    async fn create(&self, request: &CreateProductRequest) -> Result<Product, RequestError> {
        (**self).create(request).await
    }
}

//! # In-Memory Product Store
//!
//! Process-local store that assigns sequential numeric ids. Backs the `mock`
//! server and the catalog tests.

use super::ProductStore;
use crate::error::RequestError;
use crate::models::{CreateProductRequest, Product, ProductId};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    next_id: u64,
}

#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: Mutex<Inner>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled through the create path, so ids start at 1
    pub fn seeded(requests: impl IntoIterator<Item = CreateProductRequest>) -> Self {
        let store = Self::new();
        if let Ok(mut inner) = store.inner.lock() {
            for request in requests {
                Self::insert(&mut inner, request);
            }
        }
        store
    }

    fn insert(inner: &mut Inner, request: CreateProductRequest) -> Product {
        inner.next_id += 1;
        let product = request.into_product(ProductId::Number(inner.next_id));
        inner.products.push(product.clone());
        product
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, RequestError> {
        self.inner
            .lock()
            .map_err(|e| RequestError::Unavailable(format!("Lock error: {}", e)))
    }

    /// Number of list requests served
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of create requests served
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.lock().map(|inner| inner.products.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, RequestError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lock()?.products.clone())
    }

    async fn create(&self, request: &CreateProductRequest) -> Result<Product, RequestError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut inner = self.lock()?;
        let product = Self::insert(&mut inner, request.clone());
        tracing::debug!(id = %product.id, "Stored product");
        Ok(product)
    }
}

/// A small menu used by `catalog mock --seed`
pub fn sample_products() -> Vec<CreateProductRequest> {
    let item = |name: &str, description: &str, allergen: &str, cooking: &str, cost: f64, sell: f64| {
        CreateProductRequest {
            name: name.to_string(),
            description: description.to_string(),
            allergen_info: allergen.to_string(),
            cooking_instruction: cooking.to_string(),
            cost_price: cost,
            selling_price: sell,
            product_image: format!(
                "https://images.example.com/{}.jpg",
                name.to_lowercase().replace(' ', "-")
            ),
        }
    };

    vec![
        item("Margherita Pizza", "Tomato, mozzarella, basil", "Gluten, Dairy", "Bake at 250C for 8 minutes", 3.2, 9.5),
        item("Caesar Salad", "Romaine, croutons, parmesan", "Gluten, Dairy, Egg, Fish", "Toss and serve chilled", 2.1, 7.0),
        item("Tomato Soup", "Slow-cooked tomatoes and cream", "Dairy", "Simmer for 20 minutes", 1.4, 5.5),
        item("Chocolate Brownie", "Dark chocolate, walnuts", "Gluten, Dairy, Egg, Nuts", "Bake at 180C for 25 minutes", 0.9, 4.0),
    ]
}

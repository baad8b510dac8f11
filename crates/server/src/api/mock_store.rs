//! # Mock Product Store API
//!
//! Local stand-in for the remote product API, backed by
//! [`InMemoryProductStore`]. Serves the same two endpoints the catalog uses.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use catalog_core::{CreateProductRequest, InMemoryProductStore, Product, ProductStore};
use serde::Serialize;
use std::sync::Arc;

type MockState = Arc<InMemoryProductStore>;

#[derive(Debug, Serialize)]
pub struct MockError {
    pub error: String,
}

pub fn mock_routes(store: MockState) -> Router {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .with_state(store)
}

async fn list_products(
    State(store): State<MockState>,
) -> Result<Json<Vec<Product>>, (StatusCode, Json<MockError>)> {
    store.list().await.map(Json).map_err(internal)
}

async fn create_product(
    State(store): State<MockState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), (StatusCode, Json<MockError>)> {
    if request.name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MockError {
                error: "name is required".to_string(),
            }),
        ));
    }

    let product = store.create(&request).await.map_err(internal)?;
    tracing::info!(id = %product.id, name = %product.name, "Mock store created product");
    Ok((StatusCode::CREATED, Json(product)))
}

fn internal(e: catalog_core::RequestError) -> (StatusCode, Json<MockError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MockError {
            error: e.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{
        Catalog, CatalogConfig, DraftField, HttpProductStore, ProductId, RequestError,
    };
    use tokio::net::TcpListener;

    /// Serve the mock on an ephemeral port and return its base URL
    async fn spawn_mock(store: InMemoryProductStore) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = mock_routes(Arc::new(store));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_http_store_round_trip() {
        let base = spawn_mock(InMemoryProductStore::seeded(
            catalog_core::store::memory::sample_products(),
        ))
        .await;
        let store = HttpProductStore::new(&CatalogConfig::new(base)).unwrap();

        let products = store.list().await.unwrap();
        assert_eq!(products.len(), 4);

        let request = CreateProductRequest {
            name: "Garlic Bread".to_string(),
            description: "Toasted baguette".to_string(),
            allergen_info: "Gluten, Dairy".to_string(),
            cooking_instruction: "Grill for 4 minutes".to_string(),
            cost_price: 0.8,
            selling_price: 3.5,
            product_image: "https://images.example.com/garlic-bread.jpg".to_string(),
        };
        let created = store.create(&request).await.unwrap();
        assert_eq!(created.id, ProductId::Number(5));
        assert_eq!(created.selling_price, 3.5);

        assert_eq!(store.list().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_catalog_session_against_mock() {
        let base = spawn_mock(InMemoryProductStore::new()).await;
        let config = CatalogConfig::new(base);
        let mut catalog = Catalog::with_config(HttpProductStore::new(&config).unwrap(), &config);

        assert!(catalog.present().await.is_empty());

        catalog.open_draft();
        for (field, value) in [
            (DraftField::Name, "Tea"),
            (DraftField::Description, "Loose leaf"),
            (DraftField::AllergenInfo, "None"),
            (DraftField::CookingInstruction, "Steep"),
            (DraftField::CostPrice, "1"),
            (DraftField::SellingPrice, "5"),
            (DraftField::ProductImage, "tea.png"),
        ] {
            catalog.edit_draft(field, value);
        }
        let created = catalog.submit().await.unwrap();

        assert_eq!(created.id, ProductId::Number(1));
        assert_eq!(catalog.state().products, vec![created]);
        assert!(!catalog.state().is_draft_open());
    }

    #[tokio::test]
    async fn test_rejected_create_is_status_error() {
        let base = spawn_mock(InMemoryProductStore::new()).await;
        let store = HttpProductStore::new(&CatalogConfig::new(base)).unwrap();

        let request = CreateProductRequest {
            name: " ".to_string(),
            description: String::new(),
            allergen_info: String::new(),
            cooking_instruction: String::new(),
            cost_price: 0.0,
            selling_price: 0.0,
            product_image: String::new(),
        };
        let err = store.create(&request).await.unwrap_err();
        assert!(matches!(err, RequestError::Status { status: 400, .. }));
    }
}

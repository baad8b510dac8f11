//! # Catalog API
//!
//! JSON surface over the shared catalog session: the list view with its
//! search and sort controls, and the create-product form.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use catalog_core::{CatalogError, DraftField, Product, ProductDraft, SortKey, SortState};
use serde::{Deserialize, Serialize};

use crate::{AppState, CatalogSession};

/// What the list view renders
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogView {
    /// Filtered and sorted products
    pub products: Vec<Product>,
    /// Size of the whole collection
    pub total: usize,
    pub query: String,
    pub sort: SortState,
    /// Open create form, if any
    pub draft: Option<ProductDraft>,
    pub validation_error: Option<String>,
    /// Last successful load, RFC 3339
    pub loaded_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub key: SortKey,
}

#[derive(Debug, Deserialize)]
pub struct EditDraftRequest {
    pub field: DraftField,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

/// Catalog failure mapped onto an HTTP status
pub struct ApiError(StatusCode, &'static str, String);

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Validation(v) => {
                ApiError(StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION", v.user_message())
            }
            CatalogError::Request(r) => ApiError(StatusCode::BAD_GATEWAY, "REQUEST", r.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError(status, error, message) = self;
        let body = ErrorResponse {
            success: false,
            error: error.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_view))
        .route("/search", put(set_search))
        .route("/sort", post(toggle_sort))
        .route("/reload", post(reload))
        .route(
            "/draft",
            post(open_draft).delete(close_draft).patch(edit_draft),
        )
        .route("/draft/submit", post(submit_draft))
}

/// Full application: catalog routes plus health check
pub fn catalog_app(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1/catalog", catalog_routes())
        .route("/health", get(health))
        .with_state(state)
}

fn render(catalog: &CatalogSession) -> CatalogView {
    let state = catalog.state();
    CatalogView {
        products: catalog.view().into_iter().cloned().collect(),
        total: state.products.len(),
        query: state.query.clone(),
        sort: state.sort,
        draft: state.draft.clone(),
        validation_error: state.validation_error.clone(),
        loaded_at: state.loaded_at.map(|t| t.to_rfc3339()),
    }
}

/// Current view; the first call loads the collection
async fn get_view(State(state): State<AppState>) -> Json<CatalogView> {
    let mut catalog = state.catalog.lock().await;
    catalog.present().await;
    Json(render(&catalog))
}

async fn set_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Json<CatalogView> {
    let mut catalog = state.catalog.lock().await;
    catalog.set_query(req.query);
    Json(render(&catalog))
}

async fn toggle_sort(
    State(state): State<AppState>,
    Json(req): Json<SortRequest>,
) -> Json<CatalogView> {
    let mut catalog = state.catalog.lock().await;
    catalog.toggle_sort(req.key);
    Json(render(&catalog))
}

async fn reload(State(state): State<AppState>) -> Result<Json<CatalogView>, ApiError> {
    let mut catalog = state.catalog.lock().await;
    catalog.load().await?;
    Ok(Json(render(&catalog)))
}

async fn open_draft(State(state): State<AppState>) -> Json<CatalogView> {
    let mut catalog = state.catalog.lock().await;
    catalog.open_draft();
    Json(render(&catalog))
}

async fn close_draft(State(state): State<AppState>) -> Json<CatalogView> {
    let mut catalog = state.catalog.lock().await;
    catalog.close_draft();
    Json(render(&catalog))
}

async fn edit_draft(
    State(state): State<AppState>,
    Json(req): Json<EditDraftRequest>,
) -> Result<Json<CatalogView>, ApiError> {
    let mut catalog = state.catalog.lock().await;
    if !catalog.state().is_draft_open() {
        return Err(ApiError(
            StatusCode::CONFLICT,
            "NO_DRAFT",
            "Open the create form before editing it".to_string(),
        ));
    }
    catalog.edit_draft(req.field, req.value);
    Ok(Json(render(&catalog)))
}

async fn submit_draft(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let mut catalog = state.catalog.lock().await;
    let product = catalog.submit().await?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let catalog = state.catalog.lock().await;
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "products": catalog.state().products.len(),
        "loaded": catalog.state().loaded_at.is_some(),
    }))
}

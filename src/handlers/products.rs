use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use crate::{models::Product, AppState};

// ── GET /products ─────────────────────────────────────────────────────────────

/// The generated catalogue, identical on every call.
#[utoipa::path(
    get,
    path = "/products",
    operation_id = "GetProducts",
    responses(
        (status = 200, description = "All products", body = [Product])
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> Json<Arc<[Product]>> {
    debug!(count = state.products.len(), "Listed products");
    Json(Arc::clone(&state.products))
}

// ============================================================================
// Invex API - Product Handlers
// File: crates/invex-api/src/handlers/products.rs
// ============================================================================
//! Product CRUD, existence check and statistics

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{StatusCode, Uri},
    Json,
};
use serde::{Deserialize, Serialize};

use invex_core::{NumericInput, ProductChangesDraft, ProductDraft, ProductLine, ProductStats};

use crate::error::ApiError;
use crate::response::ActionResponse;
use crate::state::AppState;

/// Create payload. `prix`/`quantite` may arrive as numbers or numeric strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub num_produit: Option<String>,
    pub design: Option<String>,
    pub prix: Option<NumericInput>,
    pub quantite: Option<NumericInput>,
}

impl From<CreateProductRequest> for ProductDraft {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            num_produit: req.num_produit,
            design: req.design,
            prix: req.prix,
            quantite: req.quantite,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub design: Option<String>,
    pub prix: Option<NumericInput>,
    pub quantite: Option<NumericInput>,
}

impl From<UpdateProductRequest> for ProductChangesDraft {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            design: req.design,
            prix: req.prix,
            quantite: req.quantite,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckQuery {
    #[serde(default)]
    pub num_produit: String,
}

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ActionResponse>), ApiError> {
    let Json(payload) = payload?;
    state.product_service.add_product(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::ok("Product added successfully")),
    ))
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductLine>>, ApiError> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

/// GET /api/products/check?numProduit=X
pub async fn check_product(
    State(state): State<AppState>,
    query: Result<Query<CheckQuery>, QueryRejection>,
) -> Result<Json<ExistsResponse>, ApiError> {
    let Query(query) = query?;
    let exists = state.product_service.product_exists(&query.num_produit).await?;
    Ok(Json(ExistsResponse { exists }))
}

/// PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(num_produit): Path<String>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    apply_update(&state, &num_produit, payload).await
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(num_produit): Path<String>,
) -> Result<Json<ActionResponse>, ApiError> {
    apply_delete(&state, &num_produit).await
}

// `/api/products/check` and `/api/products/stats` win over `{id}`, yet
// `check` and `stats` are valid product numbers. PUT/DELETE on those paths
// address the product named by the last segment.

/// PUT /api/products/check, PUT /api/products/stats
pub async fn update_product_at_fixed_path(
    State(state): State<AppState>,
    uri: Uri,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    apply_update(&state, last_segment(&uri), payload).await
}

/// DELETE /api/products/check, DELETE /api/products/stats
pub async fn delete_product_at_fixed_path(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<ActionResponse>, ApiError> {
    apply_delete(&state, last_segment(&uri)).await
}

fn last_segment(uri: &Uri) -> &str {
    uri.path().rsplit('/').next().unwrap_or_default()
}

async fn apply_update(
    state: &AppState,
    num_produit: &str,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    let Json(payload) = payload?;
    state
        .product_service
        .update_product(num_produit, payload.into())
        .await?;

    Ok(Json(ActionResponse::ok("Product updated successfully")))
}

async fn apply_delete(state: &AppState, num_produit: &str) -> Result<Json<ActionResponse>, ApiError> {
    state.product_service.delete_product(num_produit).await?;
    Ok(Json(ActionResponse::ok("Product deleted successfully")))
}

/// GET /api/products/stats
pub async fn product_stats(
    State(state): State<AppState>,
) -> Result<Json<ProductStats>, ApiError> {
    let stats = state.product_service.get_stats().await?;
    Ok(Json(stats))
}

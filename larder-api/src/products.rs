use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use larder_catalog::{add_product, remove_product, rename_product, CatalogError};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddProductRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameProductRequest {
    pub old_name: String,
    pub new_name: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteProductRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/add", post(add))
        .route("/products/edit", post(rename))
        .route("/products/delete", post(delete))
}

async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, AppError> {
    let products = state.products.load_products().await?;
    Ok(Json(ProductListResponse { products }))
}

/// Empty and duplicate names are ignored, mirroring the forgiving form
/// behavior; the response is simply the resulting catalog.
async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddProductRequest>,
) -> Result<Json<ProductListResponse>, AppError> {
    let mut products = state.products.load_products().await?;
    add_product(&mut products, &request.name);
    state.products.save_products(&products).await?;
    Ok(Json(ProductListResponse { products }))
}

/// Renames cascade into every order referencing the old name; a rename onto
/// an existing name is rejected with a conflict.
async fn rename(
    State(state): State<AppState>,
    Json(request): Json<RenameProductRequest>,
) -> Result<Json<ProductListResponse>, AppError> {
    let mut products = state.products.load_products().await?;
    let mut orders = state.orders.load_orders().await?;

    rename_product(&mut products, &mut orders, &request.old_name, &request.new_name).map_err(
        |e| match e {
            CatalogError::DuplicateName(name) => {
                AppError::ConflictError(format!("Product already exists: {name}"))
            }
            CatalogError::NotFound(name) => {
                AppError::NotFoundError(format!("Product not found: {name}"))
            }
        },
    )?;

    state.products.save_products(&products).await?;
    state.orders.save_orders(&orders).await?;
    tracing::info!(old = %request.old_name, new = %request.new_name, "product renamed");
    Ok(Json(ProductListResponse { products }))
}

async fn delete(
    State(state): State<AppState>,
    Json(request): Json<DeleteProductRequest>,
) -> Result<Json<ProductListResponse>, AppError> {
    let mut products = state.products.load_products().await?;
    remove_product(&mut products, &request.name);
    state.products.save_products(&products).await?;
    Ok(Json(ProductListResponse { products }))
}

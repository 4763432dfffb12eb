use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use larder_core::Order;
use larder_order::{distinct_delivery_dates, filter_orders, intake};

use crate::error::AppError;
use crate::payload::OneOrMany;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub date: Option<NaiveDate>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub selected_date: NaiveDate,
    pub available_dates: Vec<NaiveDate>,
    pub orders: Vec<Order>,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrdersRequest {
    pub customer: String,
    pub delivery_date: NaiveDate,
    pub products: OneOrMany<String>,
    pub quantities: OneOrMany<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreateOrdersResponse {
    pub created: usize,
    pub orders: Vec<Order>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteOrderRequest {
    pub order_id: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteOrderResponse {
    pub removed: bool,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_orders))
        .route("/orders/delete", post(delete_order))
}

/// Order index: today's deliveries by default, with an optional text search
/// over customer and product names.
async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<OrderListResponse>, AppError> {
    let orders = state.orders.load_orders().await?;
    let selected_date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    Ok(Json(OrderListResponse {
        selected_date,
        available_dates: distinct_delivery_dates(&orders),
        orders: filter_orders(&orders, Some(selected_date), query.search.as_deref()),
    }))
}

/// Batch creation: one order per product line with a positive quantity.
/// Product and quantity fields pair up positionally; invalid lines are
/// skipped rather than rejected.
async fn create_orders(
    State(state): State<AppState>,
    Json(request): Json<CreateOrdersRequest>,
) -> Result<(StatusCode, Json<CreateOrdersResponse>), AppError> {
    let products = request.products.into_vec();
    let quantities = request.quantities.into_vec();
    let lines: Vec<(String, i64)> = products.into_iter().zip(quantities).collect();

    let new_orders = intake::build_orders(&request.customer, request.delivery_date, &lines);

    let mut orders = state.orders.load_orders().await?;
    orders.extend(new_orders.clone());
    state.orders.save_orders(&orders).await?;

    tracing::info!(customer = %request.customer, created = new_orders.len(), "orders created");
    Ok((
        StatusCode::CREATED,
        Json(CreateOrdersResponse {
            created: new_orders.len(),
            orders: new_orders,
        }),
    ))
}

async fn delete_order(
    State(state): State<AppState>,
    Json(request): Json<DeleteOrderRequest>,
) -> Result<Json<DeleteOrderResponse>, AppError> {
    let mut orders = state.orders.load_orders().await?;
    let removed = intake::delete_order(&mut orders, &request.order_id);
    if removed {
        state.orders.save_orders(&orders).await?;
    }
    Ok(Json(DeleteOrderResponse { removed }))
}

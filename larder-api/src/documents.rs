use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use larder_core::{DeliveryLine, ShippedItem};
use larder_doc::{
    compose_delivery_note, compose_order_list, compose_product_summary, write_artifact,
};
use larder_order::{apply_fulfillment, reconcile, select_outstanding, summarize};

use crate::error::AppError;
use crate::payload::{quantity_as_i64, OneOrMany};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DeliveryNoteQuery {
    pub customer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PrefillLine {
    pub order_id: String,
    pub product: String,
    pub ordered: u32,
    pub shipped: u32,
}

#[derive(Debug, Serialize)]
pub struct DeliveryNotePrefillResponse {
    pub customer: Option<String>,
    pub lines: Vec<PrefillLine>,
}

#[derive(Debug, Deserialize)]
pub struct ShippedLinePayload {
    pub product: String,
    #[serde(default)]
    pub quantity: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct DeliveryNoteRequest {
    pub customer: Option<String>,
    pub shipped: Option<OneOrMany<ShippedLinePayload>>,
}

#[derive(Debug, Serialize)]
pub struct DeliveryNoteResponse {
    pub document: String,
    pub lines: Vec<DeliveryLine>,
    pub fulfilled: usize,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: String,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/delivery-note", get(prefill_delivery_note).post(generate_delivery_note))
        .route("/print-summary", get(print_summary))
        .route("/print-orders", get(print_orders))
}

/// Prefill for the delivery-note form: the customer's outstanding orders
/// (falling back to all of their orders for a reprint), shipped quantity
/// defaulted to the ordered one.
async fn prefill_delivery_note(
    State(state): State<AppState>,
    Query(query): Query<DeliveryNoteQuery>,
) -> Result<Json<DeliveryNotePrefillResponse>, AppError> {
    let orders = state.orders.load_orders().await?;
    let customer = normalize_customer(query.customer);

    let lines = select_outstanding(&orders, customer.as_deref())
        .into_iter()
        .map(|o| PrefillLine {
            order_id: o.id,
            product: o.product,
            ordered: o.quantity,
            shipped: o.quantity,
        })
        .collect();

    Ok(Json(DeliveryNotePrefillResponse { customer, lines }))
}

/// Generate the delivery-note artifact and only then flip and persist the
/// fulfilled statuses. If the write fails nothing is committed, so the note
/// can be regenerated.
async fn generate_delivery_note(
    State(state): State<AppState>,
    Json(request): Json<DeliveryNoteRequest>,
) -> Result<Json<DeliveryNoteResponse>, AppError> {
    let customer = normalize_customer(request.customer);
    let shipped: Vec<ShippedItem> = request
        .shipped
        .map(OneOrMany::into_vec)
        .unwrap_or_default()
        .into_iter()
        .map(|line| ShippedItem {
            product: line.product,
            quantity: quantity_as_i64(&line.quantity),
        })
        .collect();

    let mut orders = state.orders.load_orders().await?;
    let result = reconcile(&orders, customer.as_deref(), &shipped);

    let date = Utc::now().date_naive();
    let doc = compose_delivery_note(
        &state.documents.assets,
        customer.as_deref(),
        date,
        &result.lines,
    );
    let file_name = artifact_name("delivery-note", customer.as_deref().unwrap_or("all"), date);
    let path = write_artifact(&doc, &state.documents.output_dir.join(file_name)).await?;

    apply_fulfillment(&mut orders, &result.fulfill_ids);
    state.orders.save_orders(&orders).await?;

    tracing::info!(
        customer = customer.as_deref().unwrap_or("all"),
        fulfilled = result.fulfill_ids.len(),
        path = %path.display(),
        "delivery note generated"
    );
    Ok(Json(DeliveryNoteResponse {
        document: path.display().to_string(),
        lines: result.lines,
        fulfilled: result.fulfill_ids.len(),
    }))
}

async fn print_summary(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<DocumentResponse>, AppError> {
    let orders = state.orders.load_orders().await?;
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    let summary = summarize(&orders, Some(date));
    let doc = compose_product_summary(&state.documents.assets, date, &summary);
    let path = write_artifact(
        &doc,
        &state
            .documents
            .output_dir
            .join(artifact_name("summary", "products", date)),
    )
    .await?;

    Ok(Json(DocumentResponse {
        document: path.display().to_string(),
    }))
}

async fn print_orders(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<DocumentResponse>, AppError> {
    let orders = state.orders.load_orders().await?;
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    let doc = compose_order_list(&state.documents.assets, date, &orders);
    let path = write_artifact(
        &doc,
        &state
            .documents
            .output_dir
            .join(artifact_name("order-list", "customers", date)),
    )
    .await?;

    Ok(Json(DocumentResponse {
        document: path.display().to_string(),
    }))
}

/// HTML forms post an empty string for "all customers".
fn normalize_customer(customer: Option<String>) -> Option<String> {
    customer.filter(|c| !c.trim().is_empty())
}

fn artifact_name(kind: &str, subject: &str, date: NaiveDate) -> String {
    let slug: String = subject
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let nonce = &Uuid::new_v4().to_string()[..8];
    format!("{kind}_{slug}_{date}_{nonce}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_normalization_treats_blank_as_global() {
        assert_eq!(normalize_customer(None), None);
        assert_eq!(normalize_customer(Some("".to_string())), None);
        assert_eq!(normalize_customer(Some("  ".to_string())), None);
        assert_eq!(
            normalize_customer(Some("Acme".to_string())),
            Some("Acme".to_string())
        );
    }

    #[test]
    fn artifact_names_are_filesystem_safe() {
        let name = artifact_name("delivery-note", "Borough Deli & Sons", "2024-05-01".parse().unwrap());
        assert!(name.starts_with("delivery-note_Borough-Deli---Sons_2024-05-01_"));
        assert!(name.ends_with(".txt"));
        assert!(!name.contains(' '));
        assert!(!name.contains('&'));
    }
}

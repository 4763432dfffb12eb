use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Unfulfilled,
    Fulfilled,
}

/// A single customer order line for one product on one delivery date.
///
/// Orders are created in batches (one submission may produce several of
/// these, one per product line) and persisted as a whole collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    pub delivery_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(customer: String, product: String, quantity: u32, delivery_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            customer,
            product,
            quantity,
            delivery_date,
            created_at: Utc::now(),
            status: OrderStatus::Unfulfilled,
        }
    }

    /// Whether the order still awaits a delivery note.
    pub fn is_outstanding(&self) -> bool {
        self.status == OrderStatus::Unfulfilled
    }

    /// Status only ever moves unfulfilled -> fulfilled.
    pub fn fulfill(&mut self) {
        self.status = OrderStatus::Fulfilled;
    }
}

/// One submitted line of a "shipped quantities" payload, already normalized
/// to a flat sequence at the HTTP boundary. Quantity may still be
/// non-positive here; the reconciler drops such lines silently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippedItem {
    pub product: String,
    pub quantity: i64,
}

/// A reconciled delivery-note row. Transient, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryLine {
    pub product: String,
    pub shipped: u32,
    pub ordered: u32,
}

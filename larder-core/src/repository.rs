use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Order;

/// Repository trait for the order collection.
///
/// Whole-collection semantics: every load is a fresh snapshot, every save
/// overwrites the collection. Callers mutate in memory between the two and
/// must never cache a snapshot across requests. There is no locking; two
/// racing read-modify-write cycles resolve last-writer-wins.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn load_orders(&self) -> Result<Vec<Order>, StoreError>;

    async fn save_orders(&self, orders: &[Order]) -> Result<(), StoreError>;
}

/// Repository trait for the product catalog, a duplicate-free name list.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn load_products(&self) -> Result<Vec<String>, StoreError>;

    async fn save_products(&self, products: &[String]) -> Result<(), StoreError>;
}

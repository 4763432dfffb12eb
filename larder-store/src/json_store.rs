use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use larder_core::{Order, OrderRepository, ProductRepository, StoreError};

/// Whole-collection JSON record store: `orders.json` and `products.json`
/// under one data directory.
///
/// A missing file reads as an empty collection; every save rewrites the
/// file completely. Nothing is locked, so two racing read-modify-write
/// cycles resolve last-writer-wins (an accepted limitation of the system,
/// exercised in the tests below).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    orders_path: PathBuf,
    products_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            orders_path: data_dir.join("orders.json"),
            products_path: data_dir.join("products.json"),
        }
    }

    async fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "collection file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(path, bytes).await?;
        tracing::debug!(path = %path.display(), records = records.len(), "collection saved");
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for JsonFileStore {
    async fn load_orders(&self) -> Result<Vec<Order>, StoreError> {
        Self::read_collection(&self.orders_path).await
    }

    async fn save_orders(&self, orders: &[Order]) -> Result<(), StoreError> {
        Self::write_collection(&self.orders_path, orders).await
    }
}

#[async_trait]
impl ProductRepository for JsonFileStore {
    async fn load_products(&self) -> Result<Vec<String>, StoreError> {
        Self::read_collection(&self.products_path).await
    }

    async fn save_products(&self, products: &[String]) -> Result<(), StoreError> {
        Self::write_collection(&self.products_path, products).await
    }
}

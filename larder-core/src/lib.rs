pub mod error;
pub mod models;
pub mod repository;

pub use error::StoreError;
pub use models::{DeliveryLine, Order, OrderStatus, ShippedItem};
pub use repository::{OrderRepository, ProductRepository};

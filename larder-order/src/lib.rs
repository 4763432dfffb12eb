pub mod intake;
pub mod reconcile;
pub mod summary;

pub use reconcile::{apply_fulfillment, reconcile, select_outstanding, Reconciliation};
pub use summary::{
    distinct_customers, distinct_delivery_dates, filter_orders, summarize, Summary,
};

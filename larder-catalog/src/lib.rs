pub mod catalog;

pub use catalog::{add_product, remove_product, rename_product, CatalogError};

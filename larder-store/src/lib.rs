pub mod app_config;
pub mod json_store;

pub use app_config::Config;
pub use json_store::JsonFileStore;

use std::path::PathBuf;
use std::sync::Arc;

use larder_core::{OrderRepository, ProductRepository};
use larder_doc::DocAssets;

#[derive(Clone)]
pub struct DocumentSettings {
    pub output_dir: PathBuf,
    pub assets: DocAssets,
}

#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub documents: DocumentSettings,
}

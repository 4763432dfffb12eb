use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use larder_api::{app, AppState, DocumentSettings};
use larder_doc::{DocAssets, FontAssets};
use larder_store::JsonFileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "larder_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = larder_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting Larder API on port {}", config.server.port);

    let store = Arc::new(JsonFileStore::new(&config.storage.data_dir));

    let app_state = AppState {
        orders: store.clone(),
        products: store,
        documents: DocumentSettings {
            output_dir: PathBuf::from(&config.documents.output_dir),
            assets: DocAssets {
                fonts: FontAssets {
                    regular: config.documents.font_regular.as_ref().map(PathBuf::from),
                    bold: config.documents.font_bold.as_ref().map(PathBuf::from),
                },
                logo: config.documents.logo.as_ref().map(PathBuf::from),
                company_mark: config.documents.company_mark.clone(),
            },
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

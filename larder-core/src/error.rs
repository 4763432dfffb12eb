/// Failures of the whole-collection record store.
///
/// Validation and resource problems are handled locally by the components
/// that hit them; only store I/O escalates to the request boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store record is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

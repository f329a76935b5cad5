use thiserror::Error;

/// Failures while encoding, decoding or storing a wall snapshot.
///
/// None of these reach the drawing loop: saves degrade to "not saved this
/// time" and loads to "start with an empty wall".
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot is not a JSON object")]
    NotAnObject,
    #[error("{store} storage is unavailable")]
    Unavailable { store: String },
    #[error("{store} storage quota exceeded ({needed} bytes, limit {limit})")]
    QuotaExceeded {
        store: String,
        needed: usize,
        limit: usize,
    },
    #[error("{store} storage failed: {message}")]
    Backend { store: String, message: String },
}

use crewline_core::types::DbId;

/// A remote store call failure.
///
/// Transport failures are surfaced to callers as-is with no automatic
/// retry; the workflow layer decides what degrades gracefully and what
/// aborts the operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Network-level failure (connect, timeout, TLS, body read).
    #[error("Store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("Store returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the contract.
    #[error("Failed to decode store response: {0}")]
    Decode(String),

    /// The store has no such entity.
    #[error("{entity} with id {id} not found in store")]
    NotFound { entity: &'static str, id: DbId },
}

use std::collections::HashMap;

use super::domain::{ReceiptId, ReceiptRecord};

/// Storage abstraction so the service can be exercised against any backend.
pub trait ReceiptRepository: Send + Sync {
    /// Store a record under its id, replacing any existing record with that id.
    fn put(&self, record: ReceiptRecord) -> Result<(), RepositoryError>;
    fn get(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError>;
    /// Every stored record keyed by id. No ordering is implied.
    fn list(&self) -> Result<HashMap<ReceiptId, ReceiptRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

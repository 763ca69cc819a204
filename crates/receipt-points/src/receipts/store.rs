use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{ReceiptId, ReceiptRecord};
use super::repository::{ReceiptRepository, RepositoryError};

/// Process-local receipt store. Cloning shares the same underlying map.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    records: Arc<Mutex<HashMap<ReceiptId, ReceiptRecord>>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<ReceiptId, ReceiptRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("receipt store mutex poisoned".to_string()))
    }

    pub fn len(&self) -> usize {
        self.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReceiptRepository for InMemoryReceiptStore {
    fn put(&self, record: ReceiptRecord) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn get(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<HashMap<ReceiptId, ReceiptRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.clone())
    }
}

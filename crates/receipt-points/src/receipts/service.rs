use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{ReceiptId, ReceiptRecord, ReceiptSubmission};
use super::points::{calculate_points, ParseError};
use super::repository::{ReceiptRepository, RepositoryError};
use super::validation::{validate, ValidationError};

/// Composes validation, scoring, id assignment, and storage.
pub struct ReceiptService<R> {
    repository: Arc<R>,
}

impl<R> ReceiptService<R>
where
    R: ReceiptRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate, score, and store a receipt under a freshly generated id.
    pub fn process(
        &self,
        submission: ReceiptSubmission,
    ) -> Result<ReceiptRecord, ReceiptServiceError> {
        let receipt = validate(submission).inspect_err(|err| {
            warn!(field = err.field(), "rejected receipt: {err}");
        })?;

        let breakdown = calculate_points(&receipt).inspect_err(|err| {
            warn!(field = %err.field, "rejected receipt: {err}");
        })?;

        for component in &breakdown.components {
            debug!(
                rule = component.rule.label(),
                points = component.points,
                notes = %component.notes,
                "points rule applied"
            );
        }

        let record = ReceiptRecord {
            id: ReceiptId::generate(),
            receipt,
            points: breakdown.total,
        };

        self.repository.put(record.clone())?;
        info!(id = %record.id, points = record.points, "receipt processed");

        Ok(record)
    }

    /// Points previously awarded to a stored receipt.
    pub fn points(&self, id: &ReceiptId) -> Result<i64, ReceiptServiceError> {
        self.get(id).map(|record| record.points)
    }

    pub fn get(&self, id: &ReceiptId) -> Result<ReceiptRecord, ReceiptServiceError> {
        self.repository
            .get(id)?
            .ok_or_else(|| ReceiptServiceError::NotFound(id.clone()))
    }

    pub fn list(&self) -> Result<HashMap<ReceiptId, ReceiptRecord>, ReceiptServiceError> {
        Ok(self.repository.list()?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Receipt ID {0} does not exist.")]
    NotFound(ReceiptId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ReceiptServiceError {
    /// Whether the failure stems from the submitted document rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ReceiptServiceError::Validation(_) | ReceiptServiceError::Parse(_)
        )
    }
}

//! Receipt intake: structural validation, the points rule set, storage, and the
//! HTTP routes that tie them together.

pub mod domain;
pub mod points;
pub mod repository;
pub mod router;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Item, ItemSubmission, PointsView, ProcessedView, Receipt, ReceiptId, ReceiptRecord,
    ReceiptSubmission,
};
pub use points::{calculate_points, ParseError, PointsBreakdown, PointsComponent, PointsRule};
pub use repository::{ReceiptRepository, RepositoryError};
pub use router::receipt_router;
pub use service::{ReceiptService, ReceiptServiceError};
pub use store::InMemoryReceiptStore;
pub use validation::{validate, ValidationError};

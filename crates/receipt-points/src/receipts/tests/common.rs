use std::collections::HashMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{
    Item, ItemSubmission, Receipt, ReceiptId, ReceiptRecord, ReceiptSubmission,
};
use crate::receipts::repository::{ReceiptRepository, RepositoryError};
use crate::receipts::{receipt_router, InMemoryReceiptStore, ReceiptService};

pub(super) fn item(description: &str, price: &str) -> Item {
    Item {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

/// The sample payload documented for the service: 110 points.
pub(super) fn example_receipt() -> Receipt {
    Receipt {
        retailer: "Example Retailer".to_string(),
        purchase_date: "2023-06-08".to_string(),
        purchase_time: "15:30".to_string(),
        total: "25.00".to_string(),
        items: vec![item("Item 1", "10.00"), item("Item 2", "15.00")],
    }
}

/// A receipt that scores zero on every rule except the ones a test switches on.
pub(super) fn neutral_receipt() -> Receipt {
    Receipt {
        retailer: "&".to_string(),
        purchase_date: "2022-01-02".to_string(),
        purchase_time: "09:15".to_string(),
        total: "1.01".to_string(),
        items: vec![item("ab", "1.00")],
    }
}

pub(super) fn example_submission() -> ReceiptSubmission {
    submission_from(&example_receipt())
}

pub(super) fn submission_from(receipt: &Receipt) -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: Some(receipt.retailer.clone()),
        purchase_date: Some(receipt.purchase_date.clone()),
        purchase_time: Some(receipt.purchase_time.clone()),
        total: Some(receipt.total.clone()),
        items: Some(
            receipt
                .items
                .iter()
                .map(|item| ItemSubmission {
                    short_description: Some(item.short_description.clone()),
                    price: Some(item.price.clone()),
                })
                .collect(),
        ),
    }
}

pub(super) fn example_payload() -> Value {
    serde_json::json!({
        "retailer": "Example Retailer",
        "purchaseDate": "2023-06-08",
        "purchaseTime": "15:30",
        "total": "25.00",
        "items": [
            { "shortDescription": "Item 1", "price": "10.00" },
            { "shortDescription": "Item 2", "price": "15.00" }
        ]
    })
}

pub(super) fn build_service() -> (ReceiptService<InMemoryReceiptStore>, Arc<InMemoryReceiptStore>) {
    let store = Arc::new(InMemoryReceiptStore::new());
    let service = ReceiptService::new(store.clone());
    (service, store)
}

pub(super) fn router_with_service(service: ReceiptService<InMemoryReceiptStore>) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Repository whose backing store is gone.
pub(super) struct UnavailableRepository;

impl ReceiptRepository for UnavailableRepository {
    fn put(&self, _record: ReceiptRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn get(&self, _id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list(&self) -> Result<HashMap<ReceiptId, ReceiptRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

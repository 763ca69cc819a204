use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier assigned to a receipt when it is processed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReceiptId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Inbound line item as decoded from JSON, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSubmission {
    #[serde(default, alias = "description")]
    pub short_description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

/// Inbound receipt as decoded from JSON. Every field is optional so that a missing
/// field surfaces as a validation error naming it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    #[serde(default)]
    pub retailer: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub purchase_time: Option<String>,
    #[serde(default)]
    pub total: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<ItemSubmission>>,
}

/// A purchased line with every required field present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// A structurally valid receipt. Numeric, date, and time fields are still raw text;
/// they are parsed while scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<Item>,
}

/// Stored form of a processed receipt. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRecord {
    pub id: ReceiptId,
    #[serde(flatten)]
    pub receipt: Receipt,
    pub points: i64,
}

impl ReceiptRecord {
    pub fn points_view(&self) -> PointsView {
        PointsView {
            points: self.points,
        }
    }

    pub fn processed_view(&self) -> ProcessedView {
        ProcessedView {
            id: self.id.clone(),
        }
    }
}

/// Response body for `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedView {
    pub id: ReceiptId,
}

/// Response body for `GET /receipts/{id}/points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsView {
    pub points: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generated_ids_are_unique_and_hyphenated() {
        let first = ReceiptId::generate();
        let second = ReceiptId::generate();
        assert_ne!(first, second);
        assert_eq!(first.as_str().len(), 36);
        assert!(Uuid::parse_str(first.as_str()).is_ok());
    }

    #[test]
    fn submission_accepts_description_alias_and_missing_fields() {
        let submission: ReceiptSubmission = serde_json::from_value(json!({
            "retailer": "Target",
            "items": [{ "description": "Milk", "price": "3.49" }]
        }))
        .expect("partial payload decodes");

        assert_eq!(submission.retailer.as_deref(), Some("Target"));
        assert!(submission.total.is_none());
        let items = submission.items.expect("items present");
        assert_eq!(items[0].short_description.as_deref(), Some("Milk"));
    }

    #[test]
    fn record_serializes_flat_camel_case() {
        let record = ReceiptRecord {
            id: ReceiptId("abc".to_string()),
            receipt: Receipt {
                retailer: "Target".to_string(),
                purchase_date: "2022-01-01".to_string(),
                purchase_time: "13:01".to_string(),
                total: "1.25".to_string(),
                items: vec![Item {
                    short_description: "Pepsi - 12-oz".to_string(),
                    price: "1.25".to_string(),
                }],
            },
            points: 31,
        };

        let value = serde_json::to_value(&record).expect("record serializes");
        assert_eq!(value["id"], json!("abc"));
        assert_eq!(value["purchaseDate"], json!("2022-01-01"));
        assert_eq!(value["items"][0]["shortDescription"], json!("Pepsi - 12-oz"));
        assert_eq!(value["points"], json!(31));
    }
}

use super::domain::{Item, ItemSubmission, Receipt, ReceiptSubmission};

/// Structural problem with an inbound receipt. `field` names the first offending
/// field, using `items[N].name` for line items.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field '{field}'")]
    MissingField { field: String },
    #[error("receipt must contain at least one item")]
    NoItems,
}

impl ValidationError {
    fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::NoItems => "items",
        }
    }
}

/// Confirm every required field is present and non-empty. Numbers, dates, and
/// times are not parsed here.
pub fn validate(submission: ReceiptSubmission) -> Result<Receipt, ValidationError> {
    let ReceiptSubmission {
        retailer,
        purchase_date,
        purchase_time,
        total,
        items,
    } = submission;

    let retailer = required(retailer, "retailer")?;
    let purchase_date = required(purchase_date, "purchaseDate")?;
    let purchase_time = required(purchase_time, "purchaseTime")?;
    let total = required(total, "total")?;

    let items = items.ok_or_else(|| ValidationError::missing("items"))?;
    if items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    let items = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Receipt {
        retailer,
        purchase_date,
        purchase_time,
        total,
        items,
    })
}

fn validate_item(index: usize, item: ItemSubmission) -> Result<Item, ValidationError> {
    let short_description = required(
        item.short_description,
        &format!("items[{index}].shortDescription"),
    )?;
    let price = required(item.price, &format!("items[{index}].price"))?;

    Ok(Item {
        short_description,
        price,
    })
}

// Whitespace-only strings count as present.
fn required(value: Option<String>, field: &str) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::missing(field)),
    }
}

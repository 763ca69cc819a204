use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::super::domain::{Item, Receipt};
use super::parse::{parse_amount, parse_purchase_date, parse_purchase_time, ParseError};
use super::{PointsComponent, PointsRule};

const ROUND_DOLLAR_POINTS: i64 = 50;
const QUARTER_MULTIPLE_POINTS: i64 = 25;
const POINTS_PER_ITEM_PAIR: i64 = 5;
const ODD_DAY_POINTS: i64 = 6;
const AFTERNOON_POINTS: i64 = 10;

fn quarter() -> Decimal {
    Decimal::new(25, 2)
}

fn description_multiplier() -> Decimal {
    Decimal::new(2, 1)
}

// Seconds after midnight bounding the afternoon window, both exclusive.
const AFTERNOON_START: u32 = 14 * 3600;
const AFTERNOON_END: u32 = 16 * 3600;

/// Apply every rule in order. Fields are parsed in the order total, item prices,
/// purchase date, purchase time, so the first malformed field is the one reported.
pub(crate) fn score_receipt(receipt: &Receipt) -> Result<Vec<PointsComponent>, ParseError> {
    let mut components = Vec::with_capacity(7);

    components.push(retailer_name(&receipt.retailer));

    let total = parse_amount("total", &receipt.total)?;
    components.push(round_dollar_total(total));
    components.push(quarter_multiple_total(total));

    components.push(item_pairs(receipt.items.len()));
    components.push(description_lengths(&receipt.items)?);

    components.push(odd_purchase_day(&receipt.purchase_date)?);
    components.push(afternoon_purchase(&receipt.purchase_time)?);

    Ok(components)
}

pub(crate) fn retailer_name(retailer: &str) -> PointsComponent {
    let count = retailer.chars().filter(char::is_ascii_alphanumeric).count();
    PointsComponent {
        rule: PointsRule::RetailerName,
        points: count as i64,
        notes: format!("{count} alphanumeric character(s) in retailer name"),
    }
}

pub(crate) fn round_dollar_total(total: Decimal) -> PointsComponent {
    if total.fract().is_zero() {
        PointsComponent {
            rule: PointsRule::RoundDollarTotal,
            points: ROUND_DOLLAR_POINTS,
            notes: format!("total {total} is a round dollar amount"),
        }
    } else {
        PointsComponent::none(PointsRule::RoundDollarTotal, format!("total {total} has cents"))
    }
}

pub(crate) fn quarter_multiple_total(total: Decimal) -> PointsComponent {
    if (total % quarter()).is_zero() {
        PointsComponent {
            rule: PointsRule::QuarterMultipleTotal,
            points: QUARTER_MULTIPLE_POINTS,
            notes: format!("total {total} is a multiple of 0.25"),
        }
    } else {
        PointsComponent::none(
            PointsRule::QuarterMultipleTotal,
            format!("total {total} is not a multiple of 0.25"),
        )
    }
}

pub(crate) fn item_pairs(item_count: usize) -> PointsComponent {
    let pairs = (item_count / 2) as i64;
    PointsComponent {
        rule: PointsRule::ItemPairs,
        points: pairs * POINTS_PER_ITEM_PAIR,
        notes: format!("{pairs} pair(s) across {item_count} item(s)"),
    }
}

/// Items whose trimmed description length is a multiple of three earn
/// `ceil(price * 0.2)`. An empty trimmed description qualifies. Prices of items
/// that do not qualify are never parsed.
pub(crate) fn description_lengths(items: &[Item]) -> Result<PointsComponent, ParseError> {
    let mut points: i64 = 0;
    let mut qualifying = 0usize;

    for (index, item) in items.iter().enumerate() {
        if item.short_description.trim().len() % 3 != 0 {
            continue;
        }

        let field = format!("items[{index}].price");
        let price = parse_amount(&field, &item.price)?;
        let bonus = (price * description_multiplier())
            .ceil()
            .to_i64()
            .ok_or_else(|| ParseError::new(&field, &item.price, "amount is too large"))?;

        points = points.saturating_add(bonus);
        qualifying += 1;
    }

    Ok(PointsComponent {
        rule: PointsRule::DescriptionLength,
        points,
        notes: format!(
            "{qualifying} of {} item description(s) have a length divisible by 3",
            items.len()
        ),
    })
}

pub(crate) fn odd_purchase_day(raw: &str) -> Result<PointsComponent, ParseError> {
    let date = parse_purchase_date(raw)?;
    let day = date.day();

    Ok(if day % 2 == 1 {
        PointsComponent {
            rule: PointsRule::OddPurchaseDay,
            points: ODD_DAY_POINTS,
            notes: format!("purchased on odd day {day}"),
        }
    } else {
        PointsComponent::none(
            PointsRule::OddPurchaseDay,
            format!("purchased on even day {day}"),
        )
    })
}

/// Strictly after 14:00 and strictly before 16:00.
pub(crate) fn afternoon_purchase(raw: &str) -> Result<PointsComponent, ParseError> {
    let time = parse_purchase_time(raw)?;
    let seconds = time.num_seconds_from_midnight();

    Ok(if seconds > AFTERNOON_START && seconds < AFTERNOON_END {
        PointsComponent {
            rule: PointsRule::AfternoonPurchase,
            points: AFTERNOON_POINTS,
            notes: format!("purchased at {} between 14:00 and 16:00", time.format("%H:%M")),
        }
    } else {
        PointsComponent::none(
            PointsRule::AfternoonPurchase,
            format!("purchased at {} outside 14:00-16:00", time.format("%H:%M")),
        )
    })
}

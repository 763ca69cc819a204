mod parse;
mod rules;

pub use parse::ParseError;

use super::domain::Receipt;
use serde::{Deserialize, Serialize};

/// The independent rules that contribute to a receipt's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsRule {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl PointsRule {
    pub fn label(&self) -> &'static str {
        match self {
            PointsRule::RetailerName => "Retailer name",
            PointsRule::RoundDollarTotal => "Round dollar total",
            PointsRule::QuarterMultipleTotal => "Quarter multiple total",
            PointsRule::ItemPairs => "Item pairs",
            PointsRule::DescriptionLength => "Description length",
            PointsRule::OddPurchaseDay => "Odd purchase day",
            PointsRule::AfternoonPurchase => "Afternoon purchase",
        }
    }
}

/// Points awarded by a single rule, with a note for audits and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsComponent {
    pub rule: PointsRule,
    pub points: i64,
    pub notes: String,
}

impl PointsComponent {
    fn none(rule: PointsRule, notes: String) -> Self {
        Self {
            rule,
            points: 0,
            notes,
        }
    }
}

/// Full scoring result: one component per rule, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub total: i64,
    pub components: Vec<PointsComponent>,
}

impl PointsBreakdown {
    pub fn points_for(&self, rule: PointsRule) -> i64 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .map(|component| component.points)
            .sum()
    }
}

/// Score a structurally valid receipt. Fails without a partial score if the
/// total, a qualifying item price, the purchase date, or the purchase time does
/// not parse.
pub fn calculate_points(receipt: &Receipt) -> Result<PointsBreakdown, ParseError> {
    let components = rules::score_receipt(receipt)?;
    let total = components
        .iter()
        .fold(0i64, |acc, component| acc.saturating_add(component.points));

    Ok(PointsBreakdown { total, components })
}

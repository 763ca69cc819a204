use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{
    calculate_points, validate, PointsBreakdown, Receipt, ReceiptSubmission,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document, in the same shape POST /receipts/process accepts
    pub(crate) receipt: PathBuf,
    /// Print the points awarded by each rule
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.receipt)?;
    let (receipt, breakdown) = score_receipt_json(&raw)?;
    render_score(&receipt, &breakdown, args.breakdown);
    Ok(())
}

pub(crate) fn score_receipt_json(raw: &str) -> Result<(Receipt, PointsBreakdown), AppError> {
    let submission: ReceiptSubmission = serde_json::from_str(raw)?;
    let receipt = validate(submission)?;
    let breakdown = calculate_points(&receipt)?;
    Ok((receipt, breakdown))
}

fn render_score(receipt: &Receipt, breakdown: &PointsBreakdown, show_breakdown: bool) {
    println!(
        "{} on {} at {} ({} item(s), total {})",
        receipt.retailer.trim(),
        receipt.purchase_date,
        receipt.purchase_time,
        receipt.items.len(),
        receipt.total
    );

    if show_breakdown {
        println!("\nPoints by rule");
        for component in &breakdown.components {
            println!(
                "- {}: {} ({})",
                component.rule.label(),
                component.points,
                component.notes
            );
        }
        println!();
    }

    println!("Points: {}", breakdown.total);
}

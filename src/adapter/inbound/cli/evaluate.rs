//! Handler for the `evaluate` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::EvaluateArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::notifier::format::{percent, with_thousands};
use crate::domain::{
    catalog, Evaluation, ItemCode, MarketQuote, PriceContext, ProfitabilityEvaluator,
};
use crate::error::Result;

/// Evaluate the listing described by `args`.
///
/// # Errors
///
/// Returns a domain error for a negative price or for figures that
/// overflow during evaluation.
pub fn evaluate(args: &EvaluateArgs) -> Result<Evaluation> {
    let quote = MarketQuote::try_new(args.price, args.quantity, args.quality, "cli")?;
    let context = PriceContext::new(Some(args.avg), Some(args.transport));
    let evaluation =
        ProfitabilityEvaluator::default().evaluate(ItemCode::new(args.item), &quote, &context)?;
    Ok(evaluation)
}

/// Execute the evaluate command.
pub fn execute(args: &EvaluateArgs) -> Result<()> {
    let evaluation = evaluate(args)?;
    let name = catalog::name(evaluation.code);

    if output::is_json() {
        output::json_output(json!({
            "command": "evaluate",
            "item": evaluation.code.get(),
            "name": name,
            "transport_cost": evaluation.transport_cost.to_string(),
            "receiving_amount": evaluation.receiving_amount.to_string(),
            "profit": evaluation.profit.to_string(),
            "profit_percent": evaluation.profit_percent.map(|p| p.to_string()),
            "risk_level": evaluation.risk_level.map(|r| r.as_str()),
            "recorded": evaluation.record().is_some(),
            "alert": evaluation.should_alert(),
        }));
        return Ok(());
    }

    output::section(&format!("{name} ({})", evaluation.code));
    output::field("Cost", with_thousands(evaluation.cost_price, 3));
    output::field("Average", with_thousands(evaluation.avg_price, 3));
    output::field("Transport", with_thousands(evaluation.transport_cost, 3));
    output::field("Receiving", with_thousands(evaluation.receiving_amount, 3));
    output::field("Quantity", evaluation.quantity);

    let profit = with_thousands(evaluation.profit, 2);
    if evaluation.profit.is_sign_negative() {
        output::field("Profit", output::negative(profit));
    } else {
        output::field("Profit", output::positive(profit));
    }

    match (evaluation.profit_percent, evaluation.risk_level) {
        (Some(pp), Some(risk)) => {
            output::field("Profit %", percent(pp));
            output::field("Risk", risk.label());
        }
        _ => output::warning("Average price is zero, profit percentage is undefined"),
    }

    if evaluation.should_alert() {
        output::success("Would alert");
    } else if evaluation.record().is_some() {
        output::note("Would be recorded without an alert");
    } else {
        output::note("Would be ignored");
    }
    Ok(())
}

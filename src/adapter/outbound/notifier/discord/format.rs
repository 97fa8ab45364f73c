//! Webhook payload construction.

use serde_json::{json, Value};

use crate::adapter::outbound::notifier::format::{percent, whole_with_thousands, with_thousands};
use crate::domain::{Price, RiskLevel};
use crate::port::outbound::notifier::Alert;

const ACTION_ROW: u8 = 1;
const BUTTON: u8 = 2;
const LINK_STYLE: u8 = 5;

/// Embed color for a risk level.
#[must_use]
pub const fn risk_color(level: RiskLevel) -> u32 {
    match level {
        RiskLevel::UltraLow => 65_280,
        RiskLevel::Low => 3_066_993,
        RiskLevel::Mid => 16_776_960,
        RiskLevel::High | RiskLevel::Loss => 15_158_332,
    }
}

fn price(value: Price) -> String {
    format!("${}", value.normalize())
}

/// Build the webhook body: one embed plus a link button.
#[must_use]
pub fn build_payload(alert: &Alert, footer: &str) -> Value {
    let record = &alert.record;
    let total_cost = record
        .cost_price
        .checked_mul(rust_decimal::Decimal::from(record.quantity))
        .map_or_else(|| "overflow".to_string(), |total| with_thousands(total, 2));

    let description = format!(
        "🔗 **[Click here to view the product (FOR MOBILES)]({link})**\n\
        \n\
        **⚠️ Risk Level:** `{risk}`\n\
        **💰 Buying Price:** `{cost}`\n\
        **📈 Selling Price:** `{avg}`\n\
        \n\
        **⚖️ Quantity:** `{quantity}x Units`\n\
        **📦 Quality:** `{quality}`\n\
        **💰 Total Buying Cost:** `${total}`\n\
        \n\
        **💸 Profit:** `${profit}`\n\
        **📊 Profit %:** `{pct}`\n\
        \n\
        **👤 Seller:** `{seller}`",
        link = alert.link,
        risk = record.risk_level.label(),
        cost = price(record.cost_price),
        avg = price(record.avg_price),
        quantity = with_thousands(record.quantity.into(), 0),
        quality = alert.quality,
        total = total_cost,
        profit = whole_with_thousands(record.profit),
        pct = percent(record.profit_percent),
        seller = record.seller,
    );

    json!({
        "embeds": [{
            "title": format!("🛒 Price Update: [{}](<{}>)", alert.item_name, alert.link),
            "description": description,
            "color": risk_color(record.risk_level),
            "footer": { "text": footer },
        }],
        "components": [{
            "type": ACTION_ROW,
            "components": [{
                "type": BUTTON,
                "label": "View Product",
                "style": LINK_STYLE,
                "url": alert.link,
            }],
        }],
    })
}

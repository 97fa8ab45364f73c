//! Message formatting for Telegram alerts.

use crate::adapter::outbound::notifier::format::{percent, whole_with_thousands, with_thousands};
use crate::port::outbound::notifier::Alert;

/// Format an alert as a `MarkdownV2` message.
#[must_use]
pub fn format_alert_message(alert: &Alert) -> String {
    let record = &alert.record;
    format!(
        "🛒 *{name}*\n\
        \n\
        ⚠️ {risk}\n\
        💰 Buy: `{cost}` · Avg: `{avg}`\n\
        ⚖️ Qty: `{quantity}` · Q{quality}\n\
        💸 Profit: `{profit}` \\({pct}\\)\n\
        👤 {seller}\n\
        \n\
        [View product]({link})",
        name = escape_markdown(&alert.item_name),
        risk = escape_markdown(record.risk_level.label()),
        cost = escape_markdown(&record.cost_price.normalize().to_string()),
        avg = escape_markdown(&record.avg_price.normalize().to_string()),
        quantity = escape_markdown(&with_thousands(record.quantity.into(), 0)),
        quality = alert.quality,
        profit = escape_markdown(&whole_with_thousands(record.profit)),
        pct = escape_markdown(&percent(record.profit_percent)),
        seller = escape_markdown(&record.seller),
        link = alert.link,
    )
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::{catalog, AnalysisRecord, ItemCode, RiskLevel};

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("hello"), "hello");
        assert_eq!(escape_markdown("hello_world"), "hello\\_world");
        assert_eq!(escape_markdown("1.5"), "1\\.5");
    }

    #[test]
    fn message_escapes_values() {
        let alert = Alert {
            code: ItemCode::new(147),
            item_name: "Jack o'lantern".into(),
            link: catalog::market_url(ItemCode::new(147)),
            quality: 0,
            record: AnalysisRecord {
                cost_price: dec!(1.25),
                avg_price: dec!(2),
                receiving_amount: dec!(0.94),
                quantity: 12000,
                profit: dec!(1500),
                risk_level: RiskLevel::Mid,
                seller: "A-Team".into(),
                profit_percent: dec!(4.5),
            },
        };
        let message = format_alert_message(&alert);

        assert!(message.contains("`1\\.25`"));
        assert!(message.contains("`12,000`"));
        assert!(message.contains("A\\-Team"));
        assert!(message.contains("\\(4\\.5%\\)"));
        assert!(message.ends_with("(https://www.simcompanies.com/market/resource/147/)"));
    }
}

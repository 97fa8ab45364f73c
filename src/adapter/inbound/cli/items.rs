//! Item reference table listing.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::catalog::{self, ItemInfo};
use crate::error::Result;

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Code")]
    code: u32,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Transport")]
    transport: String,
    #[tabled(rename = "Alerts")]
    alerts: &'static str,
}

impl From<&ItemInfo> for ItemRow {
    fn from(info: &ItemInfo) -> Self {
        Self {
            code: info.code.get(),
            name: info.name,
            transport: info.transport_requirement.normalize().to_string(),
            alerts: if catalog::is_excluded_from_alerts(info.code) {
                "no"
            } else {
                "yes"
            },
        }
    }
}

/// List the item reference table.
pub fn list() -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    if output::is_json() {
        let items: Vec<_> = catalog::items()
            .map(|info| {
                json!({
                    "code": info.code.get(),
                    "name": info.name,
                    "transport_requirement": info.transport_requirement.to_string(),
                    "alerts": !catalog::is_excluded_from_alerts(info.code),
                })
            })
            .collect();
        output::json_output(json!({
            "command": "items",
            "items": items,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Items");

    let rows: Vec<ItemRow> = catalog::items().map(ItemRow::from).collect();
    let table = Table::new(rows).to_string();
    output::lines(&table);
    output::note(&format!(
        "Transport is priced from item {}",
        catalog::TRANSPORT
    ));
    Ok(())
}

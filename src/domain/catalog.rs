//! Static reference data for SimCompanies resources.
//!
//! Every tradable resource has a display name and a transport-unit
//! requirement: how many units of "Transport" (item 13) it takes to ship one
//! unit of the resource. The table is an open set. Codes that appear upstream
//! before the table is updated resolve to [`UNKNOWN_ITEM_NAME`] and a zero
//! requirement.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::id::ItemCode;

/// Name reported for codes missing from the catalog.
pub const UNKNOWN_ITEM_NAME: &str = "Unknown";

/// The distinguished "Transport" resource whose price prices logistics.
pub const TRANSPORT: ItemCode = ItemCode::new(13);

/// Synthetic non-market codes that never raise alerts.
pub const EXCLUDED_FROM_ALERTS: [ItemCode; 2] = [ItemCode::new(151), ItemCode::new(152)];

const MARKET_URL: &str = "https://www.simcompanies.com/market/resource";

/// One catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemInfo {
    pub code: ItemCode,
    pub name: &'static str,
    pub transport_requirement: Decimal,
}

/// Build a catalog row.
#[must_use]
pub const fn item(code: u32, name: &'static str, transport_requirement: Decimal) -> ItemInfo {
    ItemInfo {
        code: ItemCode::new(code),
        name,
        transport_requirement,
    }
}

// Sorted by code.
static CATALOG: &[ItemInfo] = &[
    item(1, "Power", dec!(0)),
    item(2, "Water", dec!(0)),
    item(3, "Apples", dec!(1)),
    item(4, "Oranges", dec!(1)),
    item(5, "Grapes", dec!(1)),
    item(6, "Grain", dec!(0.1)),
    item(7, "Steak", dec!(1)),
    item(8, "Sausages", dec!(0.1)),
    item(9, "Eggs", dec!(0.1)),
    item(10, "Crude oil", dec!(1)),
    item(11, "Petrol", dec!(1)),
    item(12, "Diesel", dec!(1)),
    item(13, "Transport", dec!(0)),
    item(14, "Minerals", dec!(1)),
    item(15, "Bauxite", dec!(1)),
    item(16, "Silicon", dec!(1)),
    item(17, "Chemicals", dec!(1)),
    item(18, "Aluminium", dec!(1)),
    item(19, "Plastic", dec!(1)),
    item(20, "Processors", dec!(1)),
    item(21, "Electronic components", dec!(1)),
    item(22, "Batteries", dec!(1)),
    item(23, "Displays", dec!(1)),
    item(24, "Smart phones", dec!(2)),
    item(25, "Tablets", dec!(2)),
    item(26, "Laptops", dec!(2)),
    item(27, "Monitors", dec!(2)),
    item(28, "Televisions", dec!(2)),
    item(29, "Plant research", dec!(0)),
    item(30, "Energy research", dec!(0)),
    item(31, "Mining research", dec!(0)),
    item(32, "Electronics research", dec!(0)),
    item(33, "Breeding research", dec!(0)),
    item(34, "Chemistry research", dec!(0)),
    item(35, "Software", dec!(0)),
    item(40, "Cotton", dec!(0.5)),
    item(41, "Fabric", dec!(0.5)),
    item(42, "Iron ore", dec!(1)),
    item(43, "Steel", dec!(1)),
    item(44, "Sand", dec!(1)),
    item(45, "Glass", dec!(1)),
    item(46, "Leather", dec!(1)),
    item(47, "On-board computer", dec!(1)),
    item(48, "Electric motor", dec!(2)),
    item(49, "Luxury car interior", dec!(2)),
    item(50, "Basic interior", dec!(2)),
    item(51, "Car body", dec!(2)),
    item(52, "Combustion engine", dec!(2)),
    item(53, "Economy e-car", dec!(5)),
    item(54, "Luxury e-car", dec!(5)),
    item(55, "Economy car", dec!(5)),
    item(56, "Luxury car", dec!(5)),
    item(57, "Truck", dec!(5)),
    item(58, "Automotive research", dec!(0)),
    item(59, "Fashion research", dec!(0)),
    item(60, "Underwear", dec!(1)),
    item(61, "Gloves", dec!(1)),
    item(62, "Dress", dec!(1)),
    item(63, "Stiletto Heel", dec!(1)),
    item(64, "Handbags", dec!(1)),
    item(65, "Sneakers", dec!(1)),
    item(66, "Seeds", dec!(0.1)),
    item(67, "Xmas crackers", dec!(0.5)),
    item(68, "Gold ore", dec!(10)),
    item(69, "Golden bars", dec!(1000)),
    item(70, "Luxury watch", dec!(1)),
    item(71, "Necklace", dec!(1)),
    item(72, "Sugarcane", dec!(0.1)),
    item(73, "Ethanol", dec!(1)),
    item(74, "Methane", dec!(1)),
    item(75, "Carbon fibers", dec!(0.1)),
    item(76, "Carbon composite", dec!(1)),
    item(77, "Fuselage", dec!(2)),
    item(78, "Wing", dec!(2)),
    item(79, "High grade e-comps", dec!(1)),
    item(80, "Flight computer", dec!(1)),
    item(81, "Cockpit", dec!(1)),
    item(82, "Attitude control", dec!(1)),
    item(83, "Rocket fuel", dec!(1)),
    item(84, "Propellant tank", dec!(1)),
    item(85, "Solid fuel booster", dec!(1)),
    item(86, "Rocket engine", dec!(1)),
    item(87, "Heat shield", dec!(1)),
    item(88, "Ion drive", dec!(1)),
    item(89, "Jet engine", dec!(1)),
    item(98, "Quadcopter", dec!(2)),
    item(100, "Aerospace research", dec!(0)),
    item(101, "Reinforced concrete", dec!(10)),
    item(102, "Bricks", dec!(1)),
    item(103, "Cement", dec!(1)),
    item(104, "Clay", dec!(1)),
    item(105, "Limestone", dec!(1)),
    item(106, "Wood", dec!(1)),
    item(107, "Steel beams", dec!(5)),
    item(108, "Planks", dec!(1)),
    item(109, "Windows", dec!(1)),
    item(110, "Tools", dec!(1)),
    item(111, "Construction units", dec!(0)),
    item(112, "Bulldozer", dec!(5)),
    item(113, "Materials research", dec!(0)),
    item(114, "Robots", dec!(2)),
    item(115, "Cows", dec!(1)),
    item(116, "Pigs", dec!(1)),
    item(117, "Milk", dec!(1)),
    item(118, "Coffee beans", dec!(0.1)),
    item(119, "Coffee powder", dec!(1)),
    item(120, "Vegetables", dec!(0.2)),
    item(121, "Bread", dec!(1)),
    item(122, "Cheese", dec!(1)),
    item(123, "Apple pie", dec!(2)),
    item(124, "Orange juice", dec!(1)),
    item(125, "Apple cider", dec!(1)),
    item(126, "Ginger beer", dec!(1)),
    item(127, "Frozen pizza", dec!(1)),
    item(128, "Pasta", dec!(1)),
    item(129, "Hamburger", dec!(2)),
    item(130, "Lasagna", dec!(2)),
    item(131, "Meat balls", dec!(2)),
    item(132, "Cocktails", dec!(2)),
    item(133, "Flour", dec!(0.1)),
    item(134, "Butter", dec!(1)),
    item(135, "Sugar", dec!(1)),
    item(136, "Cocoa", dec!(0.1)),
    item(137, "Dough", dec!(1)),
    item(138, "Sauce", dec!(2)),
    item(139, "Fodder", dec!(1)),
    item(140, "Chocolate", dec!(1)),
    item(141, "Vegetable oil", dec!(1)),
    item(142, "Salad", dec!(2)),
    item(143, "Samosa", dec!(2)),
    item(144, "Xmas ornaments", dec!(0.5)),
    item(145, "Recipes", dec!(0)),
    item(146, "Pumpkin", dec!(1)),
    item(147, "Jack o'lantern", dec!(1)),
    item(148, "Witch costume", dec!(1)),
    item(149, "Pumpkin soup", dec!(2)),
    item(150, "Tree", dec!(1)),
];

/// Handle to an immutable, code-sorted item table.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    items: &'static [ItemInfo],
}

impl Catalog {
    /// The built-in SimCompanies resource table.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { items: CATALOG }
    }

    /// Wrap a custom table. Rows must be sorted by code.
    #[must_use]
    pub const fn from_sorted(items: &'static [ItemInfo]) -> Self {
        Self { items }
    }

    /// Look up an item, falling back to the unknown sentinel for unlisted codes.
    #[must_use]
    pub fn lookup(&self, code: ItemCode) -> ItemInfo {
        self.find(code).unwrap_or(ItemInfo {
            code,
            name: UNKNOWN_ITEM_NAME,
            transport_requirement: Decimal::ZERO,
        })
    }

    /// Look up an item, returning `None` for unlisted codes.
    #[must_use]
    pub fn find(&self, code: ItemCode) -> Option<ItemInfo> {
        self.items
            .binary_search_by_key(&code, |info| info.code)
            .ok()
            .map(|idx| self.items[idx])
    }

    /// All rows in code order.
    pub fn items(&self) -> impl Iterator<Item = &'static ItemInfo> {
        self.items.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Look up an item in the built-in catalog.
#[must_use]
pub fn lookup(code: ItemCode) -> ItemInfo {
    Catalog::builtin().lookup(code)
}

/// Look up an item in the built-in catalog, returning `None` when unlisted.
#[must_use]
pub fn find(code: ItemCode) -> Option<ItemInfo> {
    Catalog::builtin().find(code)
}

/// Display name of an item.
#[must_use]
pub fn name(code: ItemCode) -> &'static str {
    lookup(code).name
}

/// Transport units needed to move one unit of an item.
#[must_use]
pub fn transport_requirement(code: ItemCode) -> Decimal {
    lookup(code).transport_requirement
}

/// Whether alerts are suppressed for this code.
#[must_use]
pub fn is_excluded_from_alerts(code: ItemCode) -> bool {
    EXCLUDED_FROM_ALERTS.contains(&code)
}

/// Canonical market page for an item.
#[must_use]
pub fn market_url(code: ItemCode) -> String {
    format!("{MARKET_URL}/{code}/")
}

/// All built-in catalog rows in code order.
pub fn items() -> impl Iterator<Item = &'static ItemInfo> {
    Catalog::builtin().items()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_and_unique() {
        assert!(CATALOG.windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn steel_has_unit_transport() {
        let steel = lookup(ItemCode::new(43));
        assert_eq!(steel.name, "Steel");
        assert_eq!(steel.transport_requirement, dec!(1));
    }

    #[test]
    fn fractional_requirements_are_kept() {
        assert_eq!(transport_requirement(ItemCode::new(75)), dec!(0.1));
        assert_eq!(transport_requirement(ItemCode::new(40)), dec!(0.5));
        assert_eq!(transport_requirement(ItemCode::new(69)), dec!(1000));
    }

    #[test]
    fn unknown_codes_fall_back() {
        for code in [0, 151, 152, 999] {
            let info = lookup(ItemCode::new(code));
            assert_eq!(info.name, UNKNOWN_ITEM_NAME);
            assert_eq!(info.transport_requirement, Decimal::ZERO);
            assert!(find(ItemCode::new(code)).is_none());
        }
    }

    #[test]
    fn transport_item_is_free_to_ship() {
        assert_eq!(name(TRANSPORT), "Transport");
        assert_eq!(transport_requirement(TRANSPORT), Decimal::ZERO);
    }

    #[test]
    fn synthetic_codes_are_excluded() {
        assert!(is_excluded_from_alerts(ItemCode::new(151)));
        assert!(is_excluded_from_alerts(ItemCode::new(152)));
        assert!(!is_excluded_from_alerts(ItemCode::new(43)));
    }

    #[test]
    fn custom_catalog_overrides_builtin() {
        static ROWS: &[ItemInfo] = &[item(1, "Widget", dec!(2.5)), item(7, "Gadget", dec!(0))];
        let catalog = Catalog::from_sorted(ROWS);

        assert_eq!(catalog.lookup(ItemCode::new(1)).transport_requirement, dec!(2.5));
        assert_eq!(catalog.lookup(ItemCode::new(43)).name, UNKNOWN_ITEM_NAME);
        assert_eq!(catalog.items().count(), 2);
    }

    #[test]
    fn market_url_has_trailing_slash() {
        assert_eq!(
            market_url(ItemCode::new(43)),
            "https://www.simcompanies.com/market/resource/43/"
        );
    }
}

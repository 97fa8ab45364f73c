//! Outbound adapters (driven side).

pub mod firebase;
pub mod memory;
pub mod notifier;
pub mod simcompanies;

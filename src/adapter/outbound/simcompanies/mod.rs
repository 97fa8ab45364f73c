//! SimCompanies market API integration.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::SimCompaniesClient;
pub use settings::SimCompaniesConfig;

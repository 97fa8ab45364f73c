//! Infrastructure configuration modules.

pub mod alerts;
pub mod logging;
pub mod poller;
pub mod settings;
pub mod store;

//! Adapters implementing the ports, plus the CLI driving the application.

pub mod inbound;
pub mod outbound;

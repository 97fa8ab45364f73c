//! Application services: the per-item pipeline and the poll loop.

pub mod pipeline;
pub mod poller;

pub use pipeline::{ItemOutcome, ItemPipeline};
pub use poller::{CycleReport, Poller, PollerSettings};

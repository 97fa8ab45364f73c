//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the profitability pipeline and the outside
//! world. Adapters implement them to reach the market API, the price
//! history store and the alert channels.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │       Application       │
//!     ┌──────────────┤   Domain + Port         ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Market  │            │   History   │              │   Alert   │
//! │ Adapter │            │    Store    │              │ Dispatcher│
//! └─────────┘            └─────────────┘              └───────────┘
//! ```

pub mod outbound;

pub use outbound::market::MarketFetcher;
pub use outbound::notifier::{Alert, AlertDispatcher, DeliveryOutcome, DispatcherRegistry};
pub use outbound::store::PriceHistoryStore;

//! Firebase Realtime Database price history store.

pub mod settings;
pub mod store;

pub use settings::FirebaseConfig;
pub use store::FirebaseStore;

//! In-memory stores
//!
//! One [`EntityStore`] per collection and a [`SingletonStore`] for the
//! profile. Nothing is persisted; a restart resets to the seeded defaults.

pub mod entity_store;
pub mod singleton;

pub use entity_store::{EntityStore, Record, Revision};
pub use singleton::SingletonStore;

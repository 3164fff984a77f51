//! Data models
//!
//! Records held by the in-memory stores and the payloads used to create or
//! update them. All ids are `String`.

pub mod category;
pub mod dining_table;
pub mod item;
pub mod outlet;
pub mod profile;
pub mod user;

// Re-exports
pub use category::*;
pub use dining_table::*;
pub use item::*;
pub use outlet::*;
pub use profile::*;
pub use user::*;

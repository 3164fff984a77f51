//! Shared types for the POS admin panel
//!
//! Records, input payloads, the unified error system and the intent
//! envelope used by `pos-admin` and any frontend that talks to it.

pub mod error;
pub mod intent;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};

// Intent re-exports (for AdminIntent dispatch pattern)
pub use intent::{AdminIntent, CrudAction, DataResult, ProfileAction};

//! Utility modules

pub mod logger;
pub mod messages;
pub mod validation;

pub use logger::init_logger;

//! 核心模块 - 配置和状态
//!
//! - [`Config`] - 管理端配置
//! - [`AdminState`] - 所有服务的共享引用

pub mod config;
pub mod state;

pub use config::Config;
pub use state::AdminState;

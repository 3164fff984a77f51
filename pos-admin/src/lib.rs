//! POS Admin - 餐厅管理面板核心
//!
//! # 架构概述
//!
//! 管理面板维护分类、菜品、桌台、门店、用户五个内存集合以及一个单例
//! 客户资料。所有修改都经过 [`services`] 中的 CRUD 服务，在同一处执行
//! 校验、唯一性和引用检查。
//!
//! - **存储** (`store`): 快照替换式的内存集合，带修订号订阅
//! - **服务** (`services`): create / update / delete 与业务规则
//! - **表单** (`form`): 字段 schema、表单控制器、资料编辑器
//! - **删除确认** (`deletion`): 两步删除状态机
//! - **视图** (`views`): 列表、菜品分类标签页、表单与仪表盘
//! - **分发** (`commands`): JSON 意图到服务的路由
//!
//! # 模块结构
//!
//! ```text
//! pos-admin/src/
//! ├── core/          # 配置、状态
//! ├── store/         # 内存集合
//! ├── services/      # 每个实体的 CRUD 服务
//! ├── form/          # schema、控制器
//! ├── views/         # 视图模型
//! ├── utils/         # 日志、校验、提示文案
//! ├── commands.rs    # AdminIntent 分发
//! ├── deletion.rs    # 删除确认
//! └── image.rs       # 图片读取
//! ```

pub mod commands;
pub mod core;
pub mod deletion;
pub mod form;
pub mod image;
pub mod services;
pub mod store;
pub mod utils;
pub mod views;

// Re-export 公共类型
pub use commands::dispatch;
pub use core::{AdminState, Config};
pub use deletion::{DeletePrompt, DeletionGate, DeletionState, PendingDelete};
pub use form::{EntityForm, FormController, ProfileEditor};
pub use image::{ImageData, read_image_file};
pub use services::CrudService;
pub use store::{EntityStore, Record, SingletonStore};
pub use views::{DashboardSummary, RenderContext, Screen, ScreenView};

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger;

//! Intent 模块 - 基于意图的统一分发系统
//!
//! 管理面板的每个界面操作 (创建 / 编辑 / 删除) 都可以表示为一个
//! 可序列化的 [`AdminIntent`]，由 `pos-admin` 统一分发。

use serde::{Deserialize, Serialize};

use crate::models::{
    CategoryInput, DiningTableInput, ItemInput, OutletInput, ProfileInput, UserInput,
};

/// 通用 CRUD 操作
///
/// 泛型参数 `I` 是创建与编辑共用的完整表单数据。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CrudAction<I> {
    /// 创建
    Create(I),
    /// 更新 (整条记录替换，保留 ID)
    Update { id: String, data: I },
    /// 删除 (只需要 ID)
    Delete { id: String },
}

/// Profile 只有保存操作
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ProfileAction {
    Save(ProfileInput),
}

/// 管理意图 - 所有管理后台 CRUD 操作的统一入口
///
/// ```json
/// {
///   "model": "Category",
///   "action": { "type": "Create", "data": { "name": "Snacks" } }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "model", content = "action")]
pub enum AdminIntent {
    // ===== 菜单域 =====
    /// 分类
    Category(CrudAction<CategoryInput>),
    /// 菜品
    Item(CrudAction<ItemInput>),

    // ===== 位置域 =====
    /// 桌台
    Table(CrudAction<DiningTableInput>),

    // ===== 设置域 =====
    /// 门店
    Outlet(CrudAction<OutletInput>),
    /// 员工
    User(CrudAction<UserInput>),
    /// 个人资料
    Profile(ProfileAction),
}

impl AdminIntent {
    /// Resource name used in logs and results
    pub fn resource(&self) -> &'static str {
        match self {
            AdminIntent::Category(_) => "category",
            AdminIntent::Item(_) => "item",
            AdminIntent::Table(_) => "dining_table",
            AdminIntent::Outlet(_) => "outlet",
            AdminIntent::User(_) => "user",
            AdminIntent::Profile(_) => "profile",
        }
    }
}

/// 数据操作结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResult {
    /// 是否成功
    pub success: bool,
    /// 操作消息
    pub message: String,
    /// 返回数据 (创建/更新后的完整对象)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// 受影响的 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 出错的表单字段
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// 错误码 (失败时)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl DataResult {
    /// 创建成功结果 (带 ID)
    pub fn ok_with_id(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            id: Some(id.into()),
            field: None,
            code: None,
        }
    }

    /// 创建成功结果 (带数据和 ID)
    pub fn ok_with_data<T: Serialize>(
        message: impl Into<String>,
        id: impl Into<String>,
        data: &T,
    ) -> Self {
        Self {
            data: serde_json::to_value(data).ok(),
            ..Self::ok_with_id(message, id)
        }
    }

    /// 创建失败结果
    pub fn err(err: &crate::error::AppError) -> Self {
        Self {
            success: false,
            message: err.message.clone(),
            data: None,
            id: None,
            field: err.field().map(str::to_string),
            code: Some(err.code.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ErrorCode};

    #[test]
    fn test_admin_intent_serialization() {
        let intent = AdminIntent::Category(CrudAction::Create(CategoryInput {
            name: "Snacks".to_string(),
        }));

        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["model"], "Category");
        assert_eq!(json["action"]["type"], "Create");
        assert_eq!(json["action"]["data"]["name"], "Snacks");

        let parsed: AdminIntent = serde_json::from_value(json).unwrap();
        match parsed {
            AdminIntent::Category(CrudAction::Create(dto)) => assert_eq!(dto.name, "Snacks"),
            _ => panic!("Unexpected variant"),
        }
    }

    #[test]
    fn test_delete_intent_from_json() {
        let json = r#"{"model":"Table","action":{"type":"Delete","data":{"id":"t-1"}}}"#;
        let intent: AdminIntent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.resource(), "dining_table");
        assert!(matches!(
            intent,
            AdminIntent::Table(CrudAction::Delete { ref id }) if id == "t-1"
        ));
    }

    #[test]
    fn test_data_result_err_carries_field() {
        let err = AppError::duplicate(ErrorCode::ItemNameExists, "name");
        let result = DataResult::err(&err);
        assert!(!result.success);
        assert_eq!(result.field.as_deref(), Some("name"));
        assert_eq!(result.code, Some(6202));
    }
}

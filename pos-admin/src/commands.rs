//! Intent 分发
//!
//! 把 [`AdminIntent`] 路由到对应的服务，结果统一包装为 [`DataResult`]。
//! 成功消息与界面提示一致，例如 `Category Created`。

use shared::error::AppResult;
use shared::{AdminIntent, CrudAction, DataResult, ProfileAction};

use crate::core::AdminState;
use crate::services::CrudService;
use crate::store::Record;

/// 分发一个管理意图
pub fn dispatch(state: &AdminState, intent: AdminIntent) -> DataResult {
    let resource = intent.resource();
    tracing::debug!(resource, "Dispatching admin intent");

    let result = match intent {
        AdminIntent::Category(action) => run(&state.categories, action),
        AdminIntent::Item(action) => run(&state.items, action),
        AdminIntent::Table(action) => run(&state.tables, action),
        AdminIntent::Outlet(action) => run(&state.outlets, action),
        AdminIntent::User(action) => run(&state.users, action),
        AdminIntent::Profile(ProfileAction::Save(input)) => state
            .profile
            .save(input)
            .map(|profile| DataResult::ok_with_data("Profile Saved", profile.id.clone(), &profile)),
    };

    result.unwrap_or_else(|err| {
        tracing::debug!(resource, code = %err.code, message = %err.message, "Admin intent rejected");
        DataResult::err(&err)
    })
}

fn run<S: CrudService>(service: &S, action: CrudAction<S::Input>) -> AppResult<DataResult> {
    let label = S::LABEL;
    match action {
        CrudAction::Create(input) => {
            let record = service.create(input)?;
            Ok(DataResult::ok_with_data(
                format!("{label} Created"),
                record.id(),
                &record,
            ))
        }
        CrudAction::Update { id, data } => {
            let record = service.update(&id, data)?;
            Ok(DataResult::ok_with_data(
                format!("{label} Updated"),
                record.id(),
                &record,
            ))
        }
        CrudAction::Delete { id } => {
            let record = service.delete(&id)?;
            Ok(DataResult::ok_with_id(format!("{label} Deleted"), record.id()))
        }
    }
}

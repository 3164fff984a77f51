use shared::models::{Profile, default_categories};

use crate::core::Config;
use crate::services::{
    CategoryService, CrudService, DiningTableService, ItemService, OutletService, ProfileService,
    UserService,
};
use crate::store::{EntityStore, SingletonStore};
use crate::views::RenderContext;

/// 管理端状态 - 持有所有服务
///
/// 所有服务内部都是 `Arc` 共享的 store，clone 只是浅拷贝。
/// 分类 store 同时被 [`CategoryService`] 和 [`ItemService`] 持有，
/// 商品 store 同理。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | categories | 分类集合 |
/// | items | 商品集合 |
/// | tables | 桌台集合 |
/// | outlets | 门店集合 |
/// | users | 用户集合 |
/// | profile | 客户资料 (单例) |
#[derive(Debug, Clone)]
pub struct AdminState {
    pub config: Config,
    pub categories: CategoryService,
    pub items: ItemService,
    pub tables: DiningTableService,
    pub outlets: OutletService,
    pub users: UserService,
    pub profile: ProfileService,
}

impl AdminState {
    /// 创建空状态，按配置写入默认分类
    pub fn new(config: Config) -> Self {
        let category_store = if config.seed_defaults {
            EntityStore::with_records(default_categories())
        } else {
            EntityStore::new()
        };
        let item_store = EntityStore::new();

        let state = Self {
            categories: CategoryService::new(category_store.clone(), item_store.clone()),
            items: ItemService::new(item_store, category_store, config.enforce_item_category),
            tables: DiningTableService::new(EntityStore::new()),
            outlets: OutletService::new(EntityStore::new()),
            users: UserService::new(EntityStore::new()),
            profile: ProfileService::new(SingletonStore::new(Profile::empty(
                config.default_country_code.clone(),
            ))),
            config,
        };

        tracing::info!(
            categories = state.categories.store().len(),
            seeded = state.config.seed_defaults,
            enforce_item_category = state.config.enforce_item_category,
            "Admin state initialized"
        );
        state
    }

    /// Formatting context over the current category snapshot
    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(self.config.currency_symbol.clone())
            .with_categories(self.categories.list().to_vec())
    }
}

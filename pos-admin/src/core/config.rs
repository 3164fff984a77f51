use shared::models::DEFAULT_COUNTRY_CODE;

/// 管理端配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | (无) | 日志文件目录，未设置时只输出到控制台 |
/// | SEED_DEFAULTS | true | 启动时写入默认分类 |
/// | DEFAULT_COUNTRY_CODE | +60 | 新建门店的默认国家区号 |
/// | CURRENCY_SYMBOL | RM | 价格前缀 |
/// | ENFORCE_ITEM_CATEGORY | true | 商品必须引用已存在的分类 |
///
/// # 示例
///
/// ```ignore
/// LOG_LEVEL=debug CURRENCY_SYMBOL=S$ cargo run -p pos-admin
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    /// 每日滚动日志文件目录
    pub log_dir: Option<String>,
    /// 启动时写入 Dishes、Drinks 等六个默认分类
    pub seed_defaults: bool,
    pub default_country_code: String,
    pub currency_symbol: String,
    /// 创建/更新商品时校验分类引用
    pub enforce_item_category: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            seed_defaults: std::env::var("SEED_DEFAULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            default_country_code: std::env::var("DEFAULT_COUNTRY_CODE")
                .unwrap_or_else(|_| DEFAULT_COUNTRY_CODE.into()),
            currency_symbol: std::env::var("CURRENCY_SYMBOL").unwrap_or_else(|_| "RM".into()),
            enforce_item_category: std::env::var("ENFORCE_ITEM_CATEGORY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(seed_defaults: bool, enforce_item_category: bool) -> Self {
        let mut config = Self::from_env();
        config.seed_defaults = seed_defaults;
        config.enforce_item_category = enforce_item_category;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

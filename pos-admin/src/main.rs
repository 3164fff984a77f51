use pos_admin::{AdminState, AppError, Config, DashboardSummary, dispatch, init_logger};
use shared::{AdminIntent, DataResult};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// 意图控制台
///
/// 每行读取一个 JSON 格式的 [`AdminIntent`]，输出一行 [`DataResult`]。
/// 输入 `dashboard` 输出仪表盘统计。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    tracing::info!(environment = %config.environment, "POS admin console starting...");

    // 2. 初始化状态
    let state = AdminState::new(config);

    // 3. 读取意图
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let output = if line == "dashboard" {
            serde_json::to_string(&DashboardSummary::from_state(&state))?
        } else {
            let result = match serde_json::from_str::<AdminIntent>(line) {
                Ok(intent) => dispatch(&state, intent),
                Err(e) => {
                    tracing::warn!(error = %e, "Malformed intent");
                    DataResult::err(&AppError::invalid_request(format!("Malformed intent: {e}")))
                }
            };
            serde_json::to_string(&result)?
        };
        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}

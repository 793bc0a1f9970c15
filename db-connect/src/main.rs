//! MongoDB 连接串解析入口
//!
//! 在进程启动时：
//! - 加载 .env 文件（如存在）
//! - 从环境变量解析 MongoDB 连接配置
//! - 将连接串交给驱动解析，提前暴露格式错误

mod service;

use common::config::{load_dotenv, ProcessEnv};
use service::{ConnectionService, DriverSummary};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "db-connect";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (if present) before anything else
    let dotenv_path = load_dotenv();

    // 初始化日志追踪
    init_tracing();
    if let Some(path) = dotenv_path {
        info!(path = %path.display(), "已加载 .env 文件");
    }

    let service = ConnectionService::new(ProcessEnv);
    let resolution = service.resolve();

    let options = match service.driver_options(&resolution.config).await {
        Ok(options) => options,
        Err(e) => {
            error!(service = SERVICE_NAME, code = e.code(), error = %e, "驱动无法解析连接串");
            return Err(e.into());
        }
    };

    let summary = DriverSummary::from(&options);
    info!(
        service = SERVICE_NAME,
        hosts = ?summary.hosts,
        database = summary.default_database.as_deref().unwrap_or(""),
        auth_source = summary.auth_source.as_deref().unwrap_or(""),
        "驱动已接受连接配置"
    );

    Ok(())
}

/// `LOG_FORMAT=json` switches to JSON output; the filter comes from `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

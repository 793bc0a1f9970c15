//! 连接解析服务模块

use mongodb::options::ClientOptions;

use common::config::{ConnectionStringBuilder, EnvSource, Resolution};
use common::errors::{AppError, AppResult};
use common::models::ConnectionConfig;
use common::utils::scrub_secret;

/// Summary of what the driver understood from the connection URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSummary {
    pub hosts: Vec<String>,
    pub default_database: Option<String>,
    pub username: Option<String>,
    pub auth_source: Option<String>,
}

impl From<&ClientOptions> for DriverSummary {
    fn from(options: &ClientOptions) -> Self {
        Self {
            hosts: options.hosts.iter().map(|h| h.to_string()).collect(),
            default_database: options.default_database.clone(),
            username: options.credential.as_ref().and_then(|c| c.username.clone()),
            auth_source: options.credential.as_ref().and_then(|c| c.source.clone()),
        }
    }
}

/// 连接解析服务
pub struct ConnectionService<E> {
    env: E,
}

impl<E: EnvSource> ConnectionService<E> {
    /// 创建新的连接解析服务实例
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// 解析连接配置并记录使用默认值的字段
    pub fn resolve(&self) -> Resolution {
        let resolution = ConnectionStringBuilder::resolve_with_report(&self.env);
        let config = &resolution.config;

        for field in &resolution.defaulted {
            tracing::debug!(
                field = %field,
                env_var = field.env_var(),
                "未设置环境变量，使用默认值"
            );
        }
        if config.has_reserved_credential_chars() {
            tracing::warn!(
                username = %config.username,
                "用户名或密码包含未转义的 URI 保留字符，连接串可能无法被正确解析"
            );
        }
        tracing::info!(
            uri = %config.redacted_uri(),
            defaulted = resolution.defaulted.len(),
            "MongoDB 连接串已解析"
        );

        resolution
    }

    /// 将连接串交给 MongoDB 驱动解析
    pub async fn driver_options(&self, config: &ConnectionConfig) -> AppResult<ClientOptions> {
        let uri = config.to_uri();
        ClientOptions::parse(uri.as_str())
            .await
            .map_err(|e| AppError::DriverOptions(scrub_secret(&e.to_string(), &config.password)))
    }
}

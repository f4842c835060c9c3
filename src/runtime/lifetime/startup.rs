use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 安装 TLS 加密提供者，连接数据库并执行迁移
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // 重复安装时返回 Err，说明已有进程级提供者，可以忽略
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let config = AppConfig::get();

    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    Ok(StartupContext { storage })
}

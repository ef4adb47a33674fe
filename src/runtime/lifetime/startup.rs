use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::services::{LinkService, RedirectResolver};
use crate::storage::{LinkStore, SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub link_service: Arc<LinkService>,
    pub resolver: Arc<RedirectResolver>,
}

/// 准备服务器启动的上下文：连接存储、执行迁移、构建服务
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to initialize storage backend")?;

    let context = build_context(storage, config)?;

    info!(
        "Pre-startup processing completed in {} ms (backend: {}, base id length: {})",
        start_time.elapsed().as_millis(),
        context.storage.backend_name(),
        context.link_service.base_len()
    );
    Ok(context)
}

/// 基于已建立的存储构建服务（测试也走这里）
pub fn build_context(
    storage: Arc<SeaOrmStorage>,
    config: &StaticConfig,
) -> Result<StartupContext> {
    let store: Arc<dyn LinkStore> = storage.clone();

    let link_service = LinkService::new(store.clone(), config.shortener.hash_len)
        .context("Invalid shortener configuration")?;
    let resolver = RedirectResolver::new(store);

    Ok(StartupContext {
        storage,
        link_service: Arc::new(link_service),
        resolver: Arc::new(resolver),
    })
}

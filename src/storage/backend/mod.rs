//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;
pub mod retry;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::{Result, TshortError};
use crate::storage::{InsertOutcome, LinkRecord, LinkStore};

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{model_to_record, record_to_active_model};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(TshortError::database_config(format!(
            "Cannot infer database type from URL: {}. Supported: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// 规范化 backend 名称
pub fn normalize_backend_name(backend: &str) -> String {
    match backend {
        "mariadb" => "mysql".to_string(),
        other => other.to_string(),
    }
}

/// SeaORM-based link store
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
    retry_config: retry::RetryConfig,
    /// 单次操作超时（毫秒）
    timeout_ms: u64,
}

impl SeaOrmStorage {
    pub async fn new(
        database_url: &str,
        backend_name: &str,
        config: &DatabaseConfig,
    ) -> Result<Self> {
        if database_url.is_empty() {
            return Err(TshortError::database_config("database_url is not set"));
        }

        let backend_name = normalize_backend_name(backend_name);
        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url, config.pool_size).await?
        } else {
            connect_generic(database_url, &backend_name, config).await?
        };

        run_migrations(&db).await?;

        let storage = Self::from_connection(db, &backend_name, config);
        info!("{} storage initialized", storage.backend_name.to_uppercase());
        Ok(storage)
    }

    /// 复用已有连接（不运行迁移）
    pub fn from_connection(
        db: DatabaseConnection,
        backend_name: &str,
        config: &DatabaseConfig,
    ) -> Self {
        SeaOrmStorage {
            db,
            backend_name: backend_name.to_string(),
            retry_config: retry::RetryConfig {
                max_retries: config.retry_count,
                base_delay_ms: config.retry_base_delay_ms,
                max_delay_ms: config.retry_max_delay_ms,
            },
            timeout_ms: config.timeout_ms,
        }
    }

    /// 获取数据库连接（关闭连接池等场景使用）
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl LinkStore for SeaOrmStorage {
    async fn find_by_url(&self, url: &str) -> Result<Option<LinkRecord>> {
        self.get_by_url(url).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LinkRecord>> {
        self.get_by_id(id).await
    }

    async fn insert_if_absent(&self, record: LinkRecord) -> Result<InsertOutcome> {
        self.insert(record).await
    }

    fn backend_name(&self) -> &str {
        &self.backend_name
    }
}

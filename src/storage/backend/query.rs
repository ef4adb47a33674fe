//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use tracing::error;

use super::converters::model_to_record;
use super::{SeaOrmStorage, retry};
use crate::errors::{Result, TshortError};
use crate::services::id_generator::UrlDigest;
use crate::storage::LinkRecord;

use migration::entities::page;

impl SeaOrmStorage {
    /// 按 id 查询；数据库排序规则可能大小写不敏感，结果再做一次精确比较
    pub async fn get_by_id(&self, id: &str) -> Result<Option<LinkRecord>> {
        Ok(self
            .lookup_id(id)
            .await?
            .filter(|record| record.id == id))
    }

    /// 按 URL 查询：先用摘要命中唯一索引，再比较原文
    pub async fn get_by_url(&self, url: &str) -> Result<Option<LinkRecord>> {
        let db = &self.db;
        let digest = UrlDigest::of(url).to_string();

        let result = retry::with_retry_timeout(
            "find_by_url",
            self.retry_config,
            self.timeout_ms,
            || async {
                page::Entity::find()
                    .filter(page::Column::UrlDigest.eq(digest.as_str()))
                    .one(db)
                    .await
            },
        )
        .await
        .map_err(|e| {
            error!("Lookup by url failed (digest {}): {}", digest, e);
            TshortError::store_unavailable(format!("Failed to look up link by url: {}", e))
        })?;

        Ok(result.map(model_to_record).filter(|record| record.url == url))
    }

    /// 按主键读取数据库认为匹配的那一行（不做大小写校验）
    pub(super) async fn lookup_id(&self, id: &str) -> Result<Option<LinkRecord>> {
        let db = &self.db;

        let result = retry::with_retry_timeout(
            &format!("find_by_id({})", id),
            self.retry_config,
            self.timeout_ms,
            || async { page::Entity::find_by_id(id).one(db).await },
        )
        .await
        .map_err(|e| {
            error!("Lookup by id '{}' failed: {}", id, e);
            TshortError::store_unavailable(format!("Failed to look up link '{}': {}", id, e))
        })?;

        Ok(result.map(model_to_record))
    }
}

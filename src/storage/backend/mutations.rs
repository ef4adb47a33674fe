//! Mutation operations for SeaOrmStorage
//!
//! 只有一种写操作：依赖 id 主键与 url_digest 唯一索引的原子插入。

use sea_orm::{DbErr, EntityTrait, SqlErr};
use tracing::{debug, error, info};

use super::converters::record_to_active_model;
use super::{SeaOrmStorage, retry};
use crate::errors::{Result, TshortError};
use crate::storage::{InsertOutcome, LinkRecord};

use migration::entities::page;

/// 是否违反唯一约束（主键或 url_digest）
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

impl SeaOrmStorage {
    /// 插入记录；唯一约束冲突时返回占用方而不是报错
    ///
    /// 超时后的重试可能撞上上一次其实已经提交的同一行，
    /// 这种情况会以 `Conflict`（同 url）的形式返回，调用方按成功处理。
    pub async fn insert(&self, record: LinkRecord) -> Result<InsertOutcome> {
        let db = &self.db;
        let active_model = record_to_active_model(&record);

        let result = retry::with_retry_timeout(
            &format!("insert({})", record.id),
            self.retry_config,
            self.timeout_ms,
            || async {
                page::Entity::insert(active_model.clone())
                    .exec_without_returning(db)
                    .await
            },
        )
        .await;

        match result {
            Ok(_) => {
                info!("Link stored: {} -> {}", record.id, record.url);
                Ok(InsertOutcome::Inserted)
            }
            Err(e) if is_unique_violation(&e) => {
                debug!("Insert of '{}' hit a unique constraint: {}", record.id, e);
                self.resolve_conflict(&record).await
            }
            Err(e) => {
                error!("Insert of '{}' failed: {}", record.id, e);
                Err(TshortError::store_unavailable(format!(
                    "Failed to store link '{}': {}",
                    record.id, e
                )))
            }
        }
    }

    /// 找出与 `record` 冲突的已有记录：先看 URL，再看 id
    async fn resolve_conflict(&self, record: &LinkRecord) -> Result<InsertOutcome> {
        if let Some(existing) = self.get_by_url(&record.url).await? {
            return Ok(InsertOutcome::Conflict(existing));
        }
        if let Some(existing) = self.lookup_id(&record.id).await? {
            return Ok(InsertOutcome::Conflict(existing));
        }

        Err(TshortError::store_unavailable(format!(
            "Insert of '{}' reported a conflict but no conflicting record was found",
            record.id
        )))
    }
}

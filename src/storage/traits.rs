use async_trait::async_trait;

use super::models::{InsertOutcome, LinkRecord};
use crate::errors::Result;

/// 核心逻辑依赖的存储能力
///
/// 所有方法失败时返回 `TshortError::StoreUnavailable`。
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// 按完整 URL 查找
    async fn find_by_url(&self, url: &str) -> Result<Option<LinkRecord>>;

    /// 按标识符查找（大小写敏感）
    async fn find_by_id(&self, id: &str) -> Result<Option<LinkRecord>>;

    /// 原子地插入记录；id 或 url 已存在时返回冲突方，不覆盖
    async fn insert_if_absent(&self, record: LinkRecord) -> Result<InsertOutcome>;

    fn backend_name(&self) -> &str;
}

//! Redirect resolution

use std::sync::Arc;

use tracing::{debug, trace};

use super::id_generator::is_possible_id;
use crate::errors::{Result, TshortError};
use crate::storage::LinkStore;

/// Looks up the URL behind a short identifier.
pub struct RedirectResolver {
    store: Arc<dyn LinkStore>,
}

impl RedirectResolver {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// 解析标识符；未知标识符返回 `TshortError::NotFound`
    ///
    /// 标识符按原样使用，不做解码。长度或字符集不可能由本服务生成的
    /// 路径直接判定为不存在，不访问存储。
    pub async fn resolve(&self, id: &str) -> Result<String> {
        if !is_possible_id(id) {
            trace!("Rejected impossible identifier: {:?}", id);
            return Err(TshortError::not_found(id));
        }

        match self.store.find_by_id(id).await? {
            Some(record) => Ok(record.url),
            None => {
                debug!("Identifier not found: {}", id);
                Err(TshortError::not_found(id))
            }
        }
    }
}

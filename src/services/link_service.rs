//! Link assignment service
//!
//! Maps a URL to its short identifier, creating the record on first use.
//! Shared by the HTTP handlers and the command line.

use std::sync::Arc;

use tracing::{debug, error, info};

use super::id_generator::{MAX_ID_LEN, UrlDigest};
use crate::errors::{Result, TshortError};
use crate::storage::{InsertOutcome, LinkRecord, LinkStore};

/// Service for creating short links
///
/// The identifier for a URL is the shortest prefix (at least `base_len`
/// characters) of its encoded digest that no other URL holds. Repeated
/// submissions of one URL always return the same identifier.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    base_len: usize,
}

impl LinkService {
    /// Create a new LinkService instance
    ///
    /// `base_len` must be between 1 and the digest length.
    pub fn new(store: Arc<dyn LinkStore>, base_len: usize) -> Result<Self> {
        if base_len == 0 || base_len > MAX_ID_LEN {
            return Err(TshortError::configuration(format!(
                "base identifier length must be between 1 and {}, got {}",
                MAX_ID_LEN, base_len
            )));
        }
        Ok(Self { store, base_len })
    }

    pub fn base_len(&self) -> usize {
        self.base_len
    }

    /// 为 URL 分配标识符
    ///
    /// 1. URL 已存在 → 直接返回已有 id
    /// 2. 依次尝试摘要的前 L 位（L 从 base_len 开始）
    /// 3. 前缀被其他 URL 占用 → L + 1；被同一 URL 占用 → 返回它
    /// 4. 原子插入；并发冲突按第 3 步同样处理
    pub async fn assign(&self, url: &str, origin: &str) -> Result<String> {
        if url.is_empty() {
            return Err(TshortError::validation("url must not be empty"));
        }

        if let Some(existing) = self.store.find_by_url(url).await? {
            debug!("URL already known as '{}'", existing.id);
            return Ok(existing.id);
        }

        let digest = UrlDigest::of(url);

        for candidate in digest.candidates(self.base_len) {
            match self.store.find_by_id(candidate).await? {
                Some(existing) if existing.url == url => return Ok(existing.id),
                Some(existing) => {
                    debug!(
                        "Candidate '{}' already taken by {}, extending",
                        candidate, existing.url
                    );
                    continue;
                }
                None => {}
            }

            let record = LinkRecord::new(candidate, url, origin);
            match self.store.insert_if_absent(record).await? {
                InsertOutcome::Inserted => {
                    info!("Assigned '{}' to {}", candidate, url);
                    return Ok(candidate.to_string());
                }
                InsertOutcome::Conflict(existing) if existing.url == url => {
                    debug!("Concurrent insert of {} won with '{}'", url, existing.id);
                    return Ok(existing.id);
                }
                InsertOutcome::Conflict(existing) => {
                    debug!(
                        "Candidate '{}' was taken concurrently by {}, extending",
                        candidate, existing.url
                    );
                }
            }
        }

        error!(
            "Identifier space exhausted for {} (digest {}, base length {})",
            url, digest, self.base_len
        );
        Err(TshortError::collision_exhausted(format!(
            "no free identifier left for digest {}",
            digest
        )))
    }
}

//! Identifier derivation
//!
//! 短链接标识符取自 URL 的 SHA-256 摘要经 URL-safe base64 编码后的前缀。
//! 同一个 URL 永远得到同一串编码；发生冲突时只增加前缀长度，不重新计算摘要。

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

/// 编码后摘要的有效字符数（32 字节 → 43 个 base64 字符，末尾填充不计入）
pub const MAX_ID_LEN: usize = 43;

/// URL 的定长编码摘要
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlDigest(String);

impl UrlDigest {
    /// 计算 URL 的摘要
    pub fn of(url: &str) -> Self {
        let hash = Sha256::digest(url.as_bytes());
        UrlDigest(URL_SAFE_NO_PAD.encode(hash))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 取前 `len` 个字符；超出摘要长度时返回 `None`
    ///
    /// base64 字母表全是 ASCII，按字节切片不会落在字符中间。
    pub fn prefix(&self, len: usize) -> Option<&str> {
        if len == 0 || len > self.0.len() {
            None
        } else {
            Some(&self.0[..len])
        }
    }

    /// 从 `base_len` 开始逐个增长的候选标识符
    pub fn candidates(&self, base_len: usize) -> Candidates<'_> {
        Candidates {
            digest: self,
            next_len: base_len.max(1),
        }
    }
}

impl fmt::Display for UrlDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Iterator over successively longer prefixes of one digest.
pub struct Candidates<'a> {
    digest: &'a UrlDigest,
    next_len: usize,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.digest.prefix(self.next_len)?;
        self.next_len += 1;
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (MAX_ID_LEN + 1).saturating_sub(self.next_len);
        (remaining, Some(remaining))
    }
}

/// 标识符是否可能由本服务生成（长度与字母表）
///
/// 用于在查询存储之前过滤掉显然不存在的路径。
pub fn is_possible_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(
            UrlDigest::of("http://example.com"),
            UrlDigest::of("http://example.com")
        );
        assert_ne!(
            UrlDigest::of("http://example.com"),
            UrlDigest::of("http://example.org")
        );
    }

    #[test]
    fn test_digest_length_and_alphabet() {
        let digest = UrlDigest::of("http://example.com/some/long/path?q=1");
        assert_eq!(digest.as_str().len(), MAX_ID_LEN);
        assert!(is_possible_id(digest.as_str()));
        assert!(!digest.as_str().contains('='));
    }

    #[test]
    fn test_digest_known_value() {
        // sha256("") = e3b0c442...b855, base64url 无填充
        let digest = UrlDigest::of("");
        assert_eq!(
            digest.as_str(),
            "47DEQpj8HBSa-_TImW-5JCeuQeRkm5NMpJWZG3hSuFU"
        );
    }

    #[test]
    fn test_prefix_bounds() {
        let digest = UrlDigest::of("http://example.com");
        assert_eq!(digest.prefix(0), None);
        assert_eq!(digest.prefix(6).map(str::len), Some(6));
        assert_eq!(digest.prefix(MAX_ID_LEN), Some(digest.as_str()));
        assert_eq!(digest.prefix(MAX_ID_LEN + 1), None);
    }

    #[test]
    fn test_candidates_grow_from_same_digest() {
        let digest = UrlDigest::of("http://example.com");
        let candidates: Vec<&str> = digest.candidates(6).collect();

        assert_eq!(candidates.len(), MAX_ID_LEN - 6 + 1);
        assert_eq!(candidates[0].len(), 6);
        assert_eq!(candidates[1].len(), 7);
        assert!(candidates[1].starts_with(candidates[0]));
        assert_eq!(*candidates.last().unwrap(), digest.as_str());
    }

    #[test]
    fn test_candidates_beyond_digest_is_empty() {
        let digest = UrlDigest::of("http://example.com");
        assert_eq!(digest.candidates(MAX_ID_LEN + 1).count(), 0);
        assert_eq!(digest.candidates(MAX_ID_LEN).count(), 1);
    }

    #[test]
    fn test_is_possible_id() {
        assert!(is_possible_id("aB3-_z"));
        assert!(!is_possible_id(""));
        assert!(!is_possible_id("has space"));
        assert!(!is_possible_id("dot.ted"));
        assert!(!is_possible_id(&"a".repeat(MAX_ID_LEN + 1)));
    }
}

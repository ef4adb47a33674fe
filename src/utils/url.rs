//! URL 规范化
//!
//! 只补全协议，不做其他校验或改写。

use std::borrow::Cow;
use std::fmt::Write;

use crate::errors::{Result, TshortError};

/// 补全协议前缀
///
/// 不以 `http` 开头的输入会被加上 `http://`。
pub fn normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TshortError::validation("url must not be empty"));
    }

    if trimmed.starts_with("http") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("http://{}", trimmed))
    }
}

/// 生成可放入 `Location` 头的跳转地址
///
/// 控制字符（0x00-0x1F 与 0x7F）不能出现在头部值里，按 `%XX` 编码；
/// 其余字节原样保留。
pub fn redirect_location(url: &str) -> Cow<'_, str> {
    if !url.bytes().any(|b| b.is_ascii_control()) {
        return Cow::Borrowed(url);
    }

    let mut out = String::with_capacity(url.len() + 8);
    for c in url.chars() {
        if c.is_ascii_control() {
            let _ = write!(out, "%{:02X}", c as u8);
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_missing_scheme() {
        assert_eq!(normalize_url("example.com").unwrap(), "http://example.com");
        assert_eq!(
            normalize_url("example.com/a?b=c").unwrap(),
            "http://example.com/a?b=c"
        );
    }

    #[test]
    fn test_keeps_existing_scheme() {
        assert_eq!(normalize_url("http://example.com").unwrap(), "http://example.com");
        assert_eq!(
            normalize_url("https://example.com").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            normalize_url("  example.com \n").unwrap(),
            "http://example.com"
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(normalize_url(""), Err(TshortError::Validation(_))));
        assert!(matches!(normalize_url("   "), Err(TshortError::Validation(_))));
    }

    #[test]
    fn test_other_schemes_get_prefixed() {
        // 只认 http 前缀，其他协议一律当作主机名处理
        assert_eq!(
            normalize_url("ftp://files.example").unwrap(),
            "http://ftp://files.example"
        );
    }

    #[test]
    fn test_redirect_location_encodes_control_bytes() {
        assert_eq!(
            redirect_location("http://a.com/x\ny"),
            "http://a.com/x%0Ay"
        );
        assert_eq!(
            redirect_location("http://a.com/\t\r\x7f"),
            "http://a.com/%09%0D%7F"
        );
    }

    #[test]
    fn test_redirect_location_borrows_clean_urls() {
        let url = "https://example.com/ü?a=b c";
        assert!(matches!(redirect_location(url), Cow::Borrowed(u) if u == url));
    }
}

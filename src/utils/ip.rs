//! 提交者地址提取

use actix_web::HttpRequest;

/// 无法取得对端地址时记录的值
pub const UNKNOWN_ORIGIN: &str = "unknown";

/// 取连接对端的 IP（不含端口）
pub fn origin_address(req: &HttpRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_ORIGIN.to_string())
}

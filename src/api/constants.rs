//! API 模块常量定义

/// 表单中 `method` 字段取该值时返回 HTML 页面，其余情况返回 JSON
pub const WEB_METHOD: &str = "web";

/// 首页标题
pub const PAGE_TITLE: &str = "t-short: the link un-longerer";

/// 表单请求体上限（字节）
pub const MAX_FORM_SIZE: usize = 64 * 1024;

/// 请求 ID 响应头
pub const REQUEST_ID_HEADER: &str = "x-request-id";

use actix_web::HttpResponse;
use rust_embed::Embed;
use tracing::{error, trace};

use crate::api::constants::PAGE_TITLE;
use crate::errors::TshortError;

// 页面模板在编译期嵌入二进制
#[derive(Embed)]
#[folder = "templates/"]
pub(crate) struct Templates;

impl Templates {
    /// 读取模板并替换 `%KEY%` 占位符
    pub(crate) fn render(name: &str, vars: &[(&str, &str)]) -> Result<String, TshortError> {
        let file = Self::get(name).ok_or_else(|| {
            error!("Embedded template '{}' is missing", name);
            TshortError::file_operation(format!("template '{}' not embedded", name))
        })?;

        let mut html = String::from_utf8_lossy(&file.data).into_owned();
        for (key, value) in vars {
            html = html.replace(&format!("%{}%", key), value);
        }
        Ok(html)
    }
}

/// 转义插入 HTML 的文本
pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub struct FrontendService;

impl FrontendService {
    /// 首页
    pub async fn handle_index() -> Result<HttpResponse, TshortError> {
        trace!("Serving index page");

        let html = Templates::render(
            "index.html",
            &[
                ("TITLE", PAGE_TITLE),
                ("TSHORT_VERSION", env!("CARGO_PKG_VERSION")),
            ],
        )?;

        Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html))
    }
}

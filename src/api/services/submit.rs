use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::frontend::{Templates, escape_html};
use crate::api::constants::{PAGE_TITLE, WEB_METHOD};
use crate::config::ShortenerConfig;
use crate::errors::TshortError;
use crate::services::LinkService;
use crate::utils::{normalize_url, origin_address};

/// `POST /` 表单
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub method: String,
}

/// API 调用方收到的 JSON
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SubmitResponse {
    #[serde(rename = "URL")]
    pub url: String,
}

pub struct SubmitService;

impl SubmitService {
    pub async fn handle_submit(
        req: HttpRequest,
        form: web::Form<SubmitForm>,
        links: web::Data<Arc<LinkService>>,
        shortener: web::Data<ShortenerConfig>,
    ) -> Result<HttpResponse, TshortError> {
        let form = form.into_inner();
        let url = normalize_url(&form.url)?;
        let origin = origin_address(&req);

        let id = links.assign(&url, &origin).await.inspect_err(|e| {
            error!("Failed to shorten {} for {}: {}", url, origin, e);
        })?;

        let link = short_link(
            &shortener.public_scheme,
            req.connection_info().host(),
            &id,
        );
        info!("Short link {} -> {} (origin {})", link, url, origin);

        if form.method == WEB_METHOD {
            let escaped = escape_html(&link);
            let html = Templates::render(
                "response.html",
                &[("TITLE", PAGE_TITLE), ("LINK", &escaped)],
            )?;
            Ok(HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(html))
        } else {
            Ok(HttpResponse::Ok().json(SubmitResponse { url: link }))
        }
    }
}

/// `<scheme>://<host>/<id>`
pub fn short_link(scheme: &str, host: &str, id: &str) -> String {
    format!("{}://{}/{}", scheme, host, id)
}

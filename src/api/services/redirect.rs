use std::sync::Arc;

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use tracing::error;

use crate::errors::TshortError;
use crate::services::RedirectResolver;
use crate::utils::redirect_location;

pub struct RedirectService;

impl RedirectService {
    /// `GET /{id}`：307 跳转到原始 URL
    pub async fn handle_redirect(
        path: web::Path<String>,
        resolver: web::Data<Arc<RedirectResolver>>,
    ) -> Result<HttpResponse, TshortError> {
        let id = path.into_inner();

        let url = resolver.resolve(&id).await.inspect_err(|e| {
            if !matches!(e, TshortError::NotFound(_)) {
                error!("Redirect lookup for '{}' failed: {}", id, e);
            }
        })?;

        let location = redirect_location(&url).into_owned();
        Ok(HttpResponse::TemporaryRedirect()
            .insert_header((header::LOCATION, location))
            .finish())
    }
}

pub fn redirect_routes() -> actix_web::Scope {
    web::scope("")
        .route("/{id}", web::get().to(RedirectService::handle_redirect))
        .route("/{id}", web::head().to(RedirectService::handle_redirect))
}

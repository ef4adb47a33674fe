pub mod frontend;
pub mod redirect;
pub mod submit;

pub use frontend::FrontendService;
pub use redirect::{RedirectService, redirect_routes};
pub use submit::{SubmitForm, SubmitResponse, SubmitService};

use actix_web::web;

/// `/`：GET 首页，POST 提交 URL
pub fn index_routes() -> actix_web::Resource {
    web::resource("/")
        .route(web::get().to(FrontendService::handle_index))
        .route(web::head().to(FrontendService::handle_index))
        .route(web::post().to(SubmitService::handle_submit))
}

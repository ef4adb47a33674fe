//! Service layer for business logic
//!
//! Shared between the HTTP handlers and the command line.

pub mod id_generator;
mod link_service;
mod redirect;

pub use id_generator::{MAX_ID_LEN, UrlDigest};
pub use link_service::LinkService;
pub use redirect::RedirectResolver;

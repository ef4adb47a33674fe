//! HTTP surface: handlers, routes and request middleware

pub mod constants;
pub mod middleware;
pub mod services;

//! t-short: the link un-longerer
//!
//! A URL shortener whose identifiers are prefixes of the URL's SHA-256
//! digest. The same URL always maps to the same identifier; a collision only
//! lengthens the prefix.
//!
//! # Architecture
//! - `services`: identifier generation, link assignment, redirect resolution
//! - `storage`: the link store and its sea-orm backend
//! - `api`: HTTP handlers and middleware
//! - `interfaces`: the command line
//! - `config`: configuration management
//! - `runtime`: application lifecycle and execution modes
//! - `system`: logging

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;

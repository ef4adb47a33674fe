mod config_gen;
mod link;

pub use config_gen::generate_config;
pub use link::{add_link, get_link};

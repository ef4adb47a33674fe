pub mod ip;
pub mod url;

pub use ip::origin_address;
pub use url::{normalize_url, redirect_location};

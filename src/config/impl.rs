use std::sync::Arc;

use super::StaticConfig;
use crate::errors::Result;

/// Load and validate the startup configuration
///
/// Reads `path` (or `config.toml` in the current directory when `None`),
/// then applies `TSHORT__*` environment overrides. The returned `Arc` is
/// handed to the components that need it; there is no global slot.
pub fn init_config(path: Option<&str>) -> Result<Arc<StaticConfig>> {
    StaticConfig::load(path).map(Arc::new)
}

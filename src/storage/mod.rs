use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod models;
pub mod traits;

pub use backend::SeaOrmStorage;
pub use models::{InsertOutcome, LinkRecord};
pub use traits::LinkStore;

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<SeaOrmStorage>> {
        let database_url = config.resolve_url();

        // 从 URL 自动推断数据库类型
        let backend_type = backend::infer_backend_from_url(&database_url)?;

        let storage = SeaOrmStorage::new(&database_url, &backend_type, config).await?;
        Ok(Arc::new(storage))
    }
}

//! Link record entity
//!
//! `url_digest` 保存 URL 的完整 SHA-256 编码，唯一索引建在它上面，
//! 以此保证同一个 URL 只会有一条记录（TEXT 列在 MySQL 上无法直接建唯一索引）。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "pages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    #[sea_orm(unique)]
    pub url_digest: String,
    pub origin: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

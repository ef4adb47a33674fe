use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 pages 表，id 为主键
        manager
            .create_table(
                Table::create()
                    .table(Page::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Page::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Page::Url).text().not_null())
                    .col(ColumnDef::new(Page::UrlDigest).string_len(64).not_null())
                    .col(ColumnDef::new(Page::Origin).string().not_null())
                    .col(
                        ColumnDef::new(Page::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // URL 去重：唯一索引建在摘要列上
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pages_url_digest")
                    .table(Page::Table)
                    .col(Page::UrlDigest)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_pages_url_digest")
                    .table(Page::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Page::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Page {
    #[sea_orm(iden = "pages")]
    Table,
    Id,
    Url,
    UrlDigest,
    Origin,
    CreatedAt,
}

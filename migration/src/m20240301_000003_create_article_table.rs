use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Article::Table)
                    .if_not_exists()
                    .col(pk_auto(Article::Id))
                    .col(integer(Article::Uid))
                    .col(integer(Article::Pid).default(0))
                    .col(integer(Article::Like).default(0))
                    .col(string(Article::Title))
                    .col(boolean(Article::IsFolder).default(false))
                    .col(text_null(Article::Text))
                    .col(json(Article::Tags).default("[]"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_uid_pid")
                    .table(Article::Table)
                    .col(Article::Uid)
                    .col(Article::Pid)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_uid_like")
                    .table(Article::Table)
                    .col(Article::Uid)
                    .col(Article::Like)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    Table,
    Id,
    Uid,
    Pid,
    Like,
    Title,
    IsFolder,
    Text,
    Tags,
}

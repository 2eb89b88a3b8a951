use crate::types::Artist;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artist::Table)
                    .if_not_exists()
                    .col(pk_auto(Artist::Id))
                    .col(string(Artist::Name))
                    .col(string_len(Artist::City, 120))
                    .col(string_len(Artist::State, 120))
                    .col(string_len_null(Artist::Phone, 120))
                    .col(string_len_null(Artist::ImageLink, 500))
                    .col(string_len_null(Artist::FacebookLink, 120))
                    .col(string_len_null(Artist::Website, 120))
                    .col(boolean(Artist::SeekingVenue).default(false))
                    .col(string_len_null(Artist::SeekingDescription, 500))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Artist::Table).to_owned())
            .await
    }
}

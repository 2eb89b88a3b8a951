use crate::types::{Artist, ArtistGenre};
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtistGenre::Table)
                    .if_not_exists()
                    .col(pk_auto(ArtistGenre::Id))
                    .col(string(ArtistGenre::Name))
                    .col(integer(ArtistGenre::Position))
                    .col(integer(ArtistGenre::ArtistId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-artist_genre-artist_id")
                            .from(ArtistGenre::Table, ArtistGenre::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArtistGenre::Table).to_owned())
            .await
    }
}

use crate::types::{Venue, VenueGenre};
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VenueGenre::Table)
                    .if_not_exists()
                    .col(pk_auto(VenueGenre::Id))
                    .col(string(VenueGenre::Name))
                    .col(integer(VenueGenre::Position))
                    .col(integer(VenueGenre::VenueId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-venue_genre-venue_id")
                            .from(VenueGenre::Table, VenueGenre::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VenueGenre::Table).to_owned())
            .await
    }
}

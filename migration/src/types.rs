use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Venue {
    Table,
    Id,
    Name,
    City,
    State,
    Address,
    Phone,
    ImageLink,
    FacebookLink,
    Website,
    SeekingTalent,
    SeekingDescription,
}

#[derive(DeriveIden)]
pub enum Artist {
    Table,
    Id,
    Name,
    City,
    State,
    Phone,
    ImageLink,
    FacebookLink,
    Website,
    SeekingVenue,
    SeekingDescription,
}

#[derive(DeriveIden)]
pub enum Show {
    Table,
    Id,
    StartTime,
    VenueId,
    ArtistId,
}

#[derive(DeriveIden)]
pub enum VenueGenre {
    Table,
    Id,
    Name,
    Position,
    VenueId,
}

#[derive(DeriveIden)]
pub enum ArtistGenre {
    Table,
    Id,
    Name,
    Position,
    ArtistId,
}

//! Ordered genre lists, one row per genre.

use entity::{artist_genre, venue_genre};
use sea_orm::{prelude::*, ActiveValue::NotSet, QueryOrder, Set};

pub async fn venue_genres<C>(db: &C, venue_id: i32) -> Result<Vec<String>, DbErr>
where
    C: ConnectionTrait,
{
    Ok(venue_genre::Entity::find()
        .filter(venue_genre::Column::VenueId.eq(venue_id))
        .order_by_asc(venue_genre::Column::Position)
        .all(db)
        .await?
        .into_iter()
        .map(|genre| genre.name)
        .collect())
}

pub async fn artist_genres<C>(db: &C, artist_id: i32) -> Result<Vec<String>, DbErr>
where
    C: ConnectionTrait,
{
    Ok(artist_genre::Entity::find()
        .filter(artist_genre::Column::ArtistId.eq(artist_id))
        .order_by_asc(artist_genre::Column::Position)
        .all(db)
        .await?
        .into_iter()
        .map(|genre| genre.name)
        .collect())
}

/// Drops the stored list and writes `genres` in its place.
pub async fn replace_venue_genres<C>(db: &C, venue_id: i32, genres: &[String]) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    venue_genre::Entity::delete_many()
        .filter(venue_genre::Column::VenueId.eq(venue_id))
        .exec(db)
        .await?;
    if genres.is_empty() {
        return Ok(());
    }
    let rows = genres
        .iter()
        .enumerate()
        .map(|(position, name)| venue_genre::ActiveModel {
            id: NotSet,
            name: Set(name.clone()),
            position: Set(position as i32),
            venue_id: Set(venue_id),
        });
    venue_genre::Entity::insert_many(rows).exec(db).await?;
    Ok(())
}

pub async fn replace_artist_genres<C>(
    db: &C,
    artist_id: i32,
    genres: &[String],
) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    artist_genre::Entity::delete_many()
        .filter(artist_genre::Column::ArtistId.eq(artist_id))
        .exec(db)
        .await?;
    if genres.is_empty() {
        return Ok(());
    }
    let rows = genres
        .iter()
        .enumerate()
        .map(|(position, name)| artist_genre::ActiveModel {
            id: NotSet,
            name: Set(name.clone()),
            position: Set(position as i32),
            artist_id: Set(artist_id),
        });
    artist_genre::Entity::insert_many(rows).exec(db).await?;
    Ok(())
}

use entity::{artist, venue};
use log::info;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use super::genres::{replace_artist_genres, replace_venue_genres};
use super::Catalog;
use crate::error::{CatalogError, Result};
use crate::forms::{ArtistRecord, VenueRecord};

// Updates replace every column, nothing is merged with the stored row.

impl Catalog {
    pub async fn update_venue(&self, id: i32, record: VenueRecord) -> Result<venue::Model> {
        self.scoped_write(move |txn| {
            Box::pin(async move {
                let Some(venue) = venue::Entity::find_by_id(id).one(txn).await? else {
                    return Err(CatalogError::not_found("Venue", id));
                };
                let mut venue = <venue::ActiveModel>::from(venue);
                venue.name = Set(record.name);
                venue.city = Set(record.city);
                venue.state = Set(record.state);
                venue.address = Set(record.address);
                venue.phone = Set(record.phone);
                venue.image_link = Set(record.image_link);
                venue.facebook_link = Set(record.facebook_link);
                venue.website = Set(record.website);
                venue.seeking_talent = Set(record.seeking_talent);
                venue.seeking_description = Set(record.seeking_description);
                let venue = venue.update(txn).await?;
                replace_venue_genres(txn, id, &record.genres).await?;
                info!("Updated venue: {}", venue.name);
                Ok(venue)
            })
        })
        .await
    }

    pub async fn update_artist(&self, id: i32, record: ArtistRecord) -> Result<artist::Model> {
        self.scoped_write(move |txn| {
            Box::pin(async move {
                let Some(artist) = artist::Entity::find_by_id(id).one(txn).await? else {
                    return Err(CatalogError::not_found("Artist", id));
                };
                let mut artist = <artist::ActiveModel>::from(artist);
                artist.name = Set(record.name);
                artist.city = Set(record.city);
                artist.state = Set(record.state);
                artist.phone = Set(record.phone);
                artist.image_link = Set(record.image_link);
                artist.facebook_link = Set(record.facebook_link);
                artist.website = Set(record.website);
                artist.seeking_venue = Set(record.seeking_venue);
                artist.seeking_description = Set(record.seeking_description);
                let artist = artist.update(txn).await?;
                replace_artist_genres(txn, id, &record.genres).await?;
                info!("Updated artist: {}", artist.name);
                Ok(artist)
            })
        })
        .await
    }
}

use entity::{artist, show, venue};
use log::info;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, Set};

use super::genres::{replace_artist_genres, replace_venue_genres};
use super::Catalog;
use crate::error::{CatalogError, Result};
use crate::forms::{ArtistRecord, ShowRecord, VenueRecord};
use crate::schedule;

impl Catalog {
    pub async fn create_venue(&self, record: VenueRecord) -> Result<venue::Model> {
        self.scoped_write(move |txn| {
            Box::pin(async move {
                let venue = venue::ActiveModel {
                    id: NotSet,
                    name: Set(record.name),
                    city: Set(record.city),
                    state: Set(record.state),
                    address: Set(record.address),
                    phone: Set(record.phone),
                    image_link: Set(record.image_link),
                    facebook_link: Set(record.facebook_link),
                    website: Set(record.website),
                    seeking_talent: Set(record.seeking_talent),
                    seeking_description: Set(record.seeking_description),
                }
                .insert(txn)
                .await?;
                replace_venue_genres(txn, venue.id, &record.genres).await?;
                info!("Created venue: {}", venue.name);
                Ok(venue)
            })
        })
        .await
    }

    pub async fn create_artist(&self, record: ArtistRecord) -> Result<artist::Model> {
        self.scoped_write(move |txn| {
            Box::pin(async move {
                let artist = artist::ActiveModel {
                    id: NotSet,
                    name: Set(record.name),
                    city: Set(record.city),
                    state: Set(record.state),
                    phone: Set(record.phone),
                    image_link: Set(record.image_link),
                    facebook_link: Set(record.facebook_link),
                    website: Set(record.website),
                    seeking_venue: Set(record.seeking_venue),
                    seeking_description: Set(record.seeking_description),
                }
                .insert(txn)
                .await?;
                replace_artist_genres(txn, artist.id, &record.genres).await?;
                info!("Created artist: {}", artist.name);
                Ok(artist)
            })
        })
        .await
    }

    /// Both ends of the show must exist. A missing start time means now.
    pub async fn create_show(&self, record: ShowRecord) -> Result<show::Model> {
        self.scoped_write(move |txn| {
            Box::pin(async move {
                if venue::Entity::find_by_id(record.venue_id)
                    .one(txn)
                    .await?
                    .is_none()
                {
                    return Err(CatalogError::not_found("Venue", record.venue_id));
                }
                if artist::Entity::find_by_id(record.artist_id)
                    .one(txn)
                    .await?
                    .is_none()
                {
                    return Err(CatalogError::not_found("Artist", record.artist_id));
                }
                let show = show::ActiveModel {
                    id: NotSet,
                    start_time: Set(record.start_time.unwrap_or_else(schedule::now)),
                    venue_id: Set(record.venue_id),
                    artist_id: Set(record.artist_id),
                }
                .insert(txn)
                .await?;
                info!(
                    "Created show {} for artist {} at venue {}",
                    show.id, show.artist_id, show.venue_id
                );
                Ok(show)
            })
        })
        .await
    }
}

use entity::{show, venue, venue_genre};
use log::info;
use sea_orm::prelude::*;
use sea_orm::{EntityTrait, QueryFilter};

use super::Catalog;
use crate::error::{CatalogError, Result};

impl Catalog {
    /// Deletes the venue with its shows and genres. Returns what was deleted.
    ///
    /// The foreign keys cascade as well; removing the dependents here keeps
    /// the result the same on stores that do not enforce them.
    pub async fn delete_venue(&self, id: i32) -> Result<venue::Model> {
        self.scoped_write(move |txn| {
            Box::pin(async move {
                let Some(venue) = venue::Entity::find_by_id(id).one(txn).await? else {
                    return Err(CatalogError::not_found("Venue", id));
                };
                let shows = show::Entity::delete_many()
                    .filter(show::Column::VenueId.eq(id))
                    .exec(txn)
                    .await?;
                venue_genre::Entity::delete_many()
                    .filter(venue_genre::Column::VenueId.eq(id))
                    .exec(txn)
                    .await?;
                venue::Entity::delete_by_id(id).exec(txn).await?;
                info!(
                    "Deleted venue: {} with {} show(s)",
                    venue.name, shows.rows_affected
                );
                Ok(venue)
            })
        })
        .await
    }
}

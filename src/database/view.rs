//! Read side: the view models each page renders and the queries behind them.

use chrono::NaiveDateTime;
use entity::{artist, show, venue};
use log::warn;
use sea_orm::prelude::*;
use sea_orm::{LoaderTrait, QueryOrder, QuerySelect};

use super::genres::{artist_genres, venue_genres};
use super::Catalog;
use crate::error::Result;
use crate::format::{format_datetime, DateFormat};
use crate::schedule;

/// A venue or artist in a list, with how many of its shows are still to come.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing a city and state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Summary>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<Summary>,
}

/// A show seen from one side: the other party's id, name and picture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowCard {
    pub id: i32,
    pub name: String,
    pub image_link: String,
    pub starts_at: NaiveDateTime,
    pub start_time: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub image_link: String,
    /// Artists that played here
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
    pub image_link: String,
    /// Venues played
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

impl Catalog {
    /// Every venue, grouped by the distinct (city, state) pairs in the store.
    pub async fn venue_areas(&self, now: NaiveDateTime) -> Result<Vec<Area>> {
        let pairs: Vec<(String, String)> = venue::Entity::find()
            .select_only()
            .column(venue::Column::City)
            .column(venue::Column::State)
            .distinct()
            .order_by_asc(venue::Column::State)
            .order_by_asc(venue::Column::City)
            .into_tuple()
            .all(&self.database)
            .await?;

        let mut areas = Vec::with_capacity(pairs.len());
        for (city, state) in pairs {
            let venues = venue::Entity::find()
                .filter(venue::Column::City.eq(city.as_str()))
                .filter(venue::Column::State.eq(state.as_str()))
                .order_by_asc(venue::Column::Id)
                .all(&self.database)
                .await?;
            let venues = self.venue_summaries(venues, now).await?;
            areas.push(Area {
                city,
                state,
                venues,
            });
        }
        Ok(areas)
    }

    pub async fn search_venues(&self, term: &str, now: NaiveDateTime) -> Result<SearchResults> {
        let mut venues = venue::Entity::find()
            .order_by_asc(venue::Column::Id)
            .all(&self.database)
            .await?;
        venues.retain(|venue| name_contains(&venue.name, term));
        let data = self.venue_summaries(venues, now).await?;
        Ok(SearchResults {
            count: data.len(),
            data,
        })
    }

    pub async fn search_artists(&self, term: &str, now: NaiveDateTime) -> Result<SearchResults> {
        let mut artists = artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .all(&self.database)
            .await?;
        artists.retain(|artist| name_contains(&artist.name, term));
        let shows = artists.load_many(show::Entity, &self.database).await?;
        let data: Vec<Summary> = artists
            .into_iter()
            .zip(shows)
            .map(|(artist, shows)| Summary {
                id: artist.id,
                name: artist.name,
                num_upcoming_shows: count_upcoming(&shows, now),
            })
            .collect();
        Ok(SearchResults {
            count: data.len(),
            data,
        })
    }

    pub async fn artists(&self) -> Result<Vec<artist::Model>> {
        let mut artists = self.find_all::<artist::Entity>().await?;
        artists.sort_by_key(|artist| artist.id);
        Ok(artists)
    }

    pub async fn venue_detail(&self, id: i32, now: NaiveDateTime) -> Result<VenueDetail> {
        let venue = self.venue(id).await?;
        let genres = venue_genres(&self.database, id).await?;
        let mut shows = self.model_related::<_, show::Entity>(&venue).await?;
        shows.sort_by_key(|show| show.start_time);
        let artists = shows.load_one(artist::Entity, &self.database).await?;

        let mut cards = Vec::with_capacity(shows.len());
        for (show, artist) in shows.into_iter().zip(artists) {
            match artist {
                Some(artist) => cards.push(card(&show, artist.id, artist.name, artist.image_link)),
                None => warn!("Show {} points at a missing artist", show.id),
            }
        }
        let split = schedule::partition(cards, |card| card.starts_at, now);

        Ok(VenueDetail {
            id: venue.id,
            name: venue.name,
            genres,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone.unwrap_or_default(),
            website: venue.website.unwrap_or_default(),
            facebook_link: venue.facebook_link.unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.unwrap_or_default(),
            image_link: venue.image_link.unwrap_or_default(),
            past_shows_count: split.past.len(),
            upcoming_shows_count: split.upcoming.len(),
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        })
    }

    pub async fn artist_detail(&self, id: i32, now: NaiveDateTime) -> Result<ArtistDetail> {
        let artist = self.artist(id).await?;
        let genres = artist_genres(&self.database, id).await?;
        let mut shows = self.model_related::<_, show::Entity>(&artist).await?;
        shows.sort_by_key(|show| show.start_time);
        let venues = shows.load_one(venue::Entity, &self.database).await?;

        let mut cards = Vec::with_capacity(shows.len());
        for (show, venue) in shows.into_iter().zip(venues) {
            match venue {
                Some(venue) => cards.push(card(&show, venue.id, venue.name, venue.image_link)),
                None => warn!("Show {} points at a missing venue", show.id),
            }
        }
        let split = schedule::partition(cards, |card| card.starts_at, now);

        Ok(ArtistDetail {
            id: artist.id,
            name: artist.name,
            genres,
            city: artist.city,
            state: artist.state,
            phone: artist.phone.unwrap_or_default(),
            website: artist.website.unwrap_or_default(),
            facebook_link: artist.facebook_link.unwrap_or_default(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.unwrap_or_default(),
            image_link: artist.image_link.unwrap_or_default(),
            past_shows_count: split.past.len(),
            upcoming_shows_count: split.upcoming.len(),
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        })
    }

    /// Every show with both of its parties.
    pub async fn shows(&self) -> Result<Vec<ShowListing>> {
        let shows = show::Entity::find()
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
            .all(&self.database)
            .await?;
        let venues = shows.load_one(venue::Entity, &self.database).await?;
        let artists = shows.load_one(artist::Entity, &self.database).await?;

        let mut listings = Vec::with_capacity(shows.len());
        for ((show, venue), artist) in shows.into_iter().zip(venues).zip(artists) {
            let (Some(venue), Some(artist)) = (venue, artist) else {
                warn!("Show {} is missing its venue or artist", show.id);
                continue;
            };
            listings.push(ShowListing {
                venue_id: venue.id,
                venue_name: venue.name,
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_link: artist.image_link.unwrap_or_default(),
                start_time: format_datetime(&show.start_time, DateFormat::Medium),
            });
        }
        Ok(listings)
    }

    pub async fn venue_genres(&self, id: i32) -> Result<Vec<String>> {
        Ok(venue_genres(&self.database, id).await?)
    }

    pub async fn artist_genres(&self, id: i32) -> Result<Vec<String>> {
        Ok(artist_genres(&self.database, id).await?)
    }

    async fn venue_summaries(
        &self,
        venues: Vec<venue::Model>,
        now: NaiveDateTime,
    ) -> Result<Vec<Summary>> {
        let shows = venues.load_many(show::Entity, &self.database).await?;
        Ok(venues
            .into_iter()
            .zip(shows)
            .map(|(venue, shows)| Summary {
                id: venue.id,
                name: venue.name,
                num_upcoming_shows: count_upcoming(&shows, now),
            })
            .collect())
    }
}

fn count_upcoming(shows: &[show::Model], now: NaiveDateTime) -> usize {
    schedule::count_upcoming(shows.iter().map(|show| show.start_time), now)
}

fn card(show: &show::Model, id: i32, name: String, image_link: Option<String>) -> ShowCard {
    ShowCard {
        id,
        name,
        image_link: image_link.unwrap_or_default(),
        starts_at: show.start_time,
        start_time: format_datetime(&show.start_time, DateFormat::Full),
    }
}

/// Case-insensitive substring match with Unicode case folding.
/// SQLite `LOWER()` only folds ASCII, so names are compared here.
fn name_contains(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::name_contains;

    #[test]
    fn name_match_ignores_case() {
        assert!(name_contains("The Wild Sax Band", "band"));
        assert!(name_contains("The Wild Sax Band", "SAX"));
        assert!(!name_contains("Matt Quevedo", "band"));
        assert!(name_contains("Matt Quevedo", ""));
    }

    #[test]
    fn name_match_folds_non_ascii() {
        assert!(name_contains("ÉLAN Quartet", "élan"));
        assert!(name_contains("ÉLAN Quartet", "ÉLAN"));
        assert!(name_contains("Café Dušan", "DUŠAN"));
    }

    #[test]
    fn wildcards_are_literal() {
        assert!(!name_contains("The Musical Hop", "%"));
        assert!(!name_contains("The Musical Hop", "_"));
        assert!(name_contains("100% Jazz", "100%"));
    }
}

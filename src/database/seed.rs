use chrono::{NaiveDate, NaiveDateTime};
use entity::venue;
use log::info;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::Catalog;
use crate::error::Result;
use crate::forms::{ArtistRecord, ShowRecord, VenueRecord};

impl Catalog {
    /// Fills an empty catalog with a few venues, artists and shows.
    /// Returns false when there was already data.
    pub async fn seed_if_empty(&self) -> Result<bool> {
        let count = venue::Entity::find().count(&self.database).await?;
        if count > 0 {
            return Ok(false);
        }

        let mut venue_ids = vec![];
        for record in sample_venues() {
            venue_ids.push(self.create_venue(record).await?.id);
        }
        let mut artist_ids = vec![];
        for record in sample_artists() {
            artist_ids.push(self.create_artist(record).await?.id);
        }

        // (venue, artist, start)
        let bookings = [
            (0, 0, at(2019, 5, 21, 21, 30)),
            (2, 1, at(2019, 6, 15, 23, 0)),
            (2, 2, at(2035, 4, 1, 20, 0)),
            (2, 2, at(2035, 4, 8, 20, 0)),
            (2, 2, at(2035, 4, 15, 20, 0)),
        ];
        for (venue, artist, start_time) in bookings {
            self.create_show(ShowRecord {
                venue_id: venue_ids[venue],
                artist_id: artist_ids[artist],
                start_time,
            })
            .await?;
        }
        info!(
            "Seeded {} venues, {} artists and {} shows",
            venue_ids.len(),
            artist_ids.len(),
            bookings.len()
        );
        Ok(true)
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

fn genres(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn sample_venues() -> Vec<VenueRecord> {
    vec![
        VenueRecord {
            name: "The Musical Hop".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "1015 Folsom Street".into(),
            phone: Some("123-123-1234".into()),
            genres: genres(&["Jazz", "Reggae", "Swing", "Classical", "Folk"]),
            image_link: Some("https://images.unsplash.com/photo-1543900694-133f37abaaa5?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=400&q=60".into()),
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".into()),
            website: Some("https://www.themusicalhop.com".into()),
            seeking_talent: true,
            seeking_description: Some("We are on the lookout for a local artist to play every two weeks. Please call us.".into()),
        },
        VenueRecord {
            name: "The Dueling Pianos Bar".into(),
            city: "New York".into(),
            state: "NY".into(),
            address: "335 Delancey Street".into(),
            phone: Some("914-003-1132".into()),
            genres: genres(&["Classical", "R&B", "Hip-Hop"]),
            image_link: Some("https://images.unsplash.com/photo-1497032205916-ac775f0649ae?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=750&q=80".into()),
            facebook_link: Some("https://www.facebook.com/theduelingpianos".into()),
            website: Some("https://www.theduelingpianos.com".into()),
            seeking_talent: false,
            seeking_description: None,
        },
        VenueRecord {
            name: "Park Square Live Music & Coffee".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "34 Whiskey Moore Ave".into(),
            phone: Some("415-000-1234".into()),
            genres: genres(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            image_link: Some("https://images.unsplash.com/photo-1485686531765-ba63b07845a7?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=747&q=80".into()),
            facebook_link: Some("https://www.facebook.com/ParkSquareLiveMusicAndCoffee".into()),
            website: Some("https://www.parksquarelivemusicandcoffee.com".into()),
            seeking_talent: false,
            seeking_description: None,
        },
    ]
}

fn sample_artists() -> Vec<ArtistRecord> {
    vec![
        ArtistRecord {
            name: "Guns N Petals".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: Some("326-123-5000".into()),
            genres: genres(&["Rock n Roll"]),
            image_link: Some("https://images.unsplash.com/photo-1549213783-8284d0336c4f?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=300&q=80".into()),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".into()),
            website: Some("https://www.gunsnpetalsband.com".into()),
            seeking_venue: true,
            seeking_description: Some("Looking for shows to perform at in the San Francisco Bay Area!".into()),
        },
        ArtistRecord {
            name: "Matt Quevedo".into(),
            city: "New York".into(),
            state: "NY".into(),
            phone: Some("300-400-5000".into()),
            genres: genres(&["Jazz"]),
            image_link: Some("https://images.unsplash.com/photo-1495223153807-b916f75de8c5?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=334&q=80".into()),
            facebook_link: Some("https://www.facebook.com/mattquevedo923251523".into()),
            website: None,
            seeking_venue: false,
            seeking_description: None,
        },
        ArtistRecord {
            name: "The Wild Sax Band".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: Some("432-325-5432".into()),
            genres: genres(&["Jazz", "Classical"]),
            image_link: Some("https://images.unsplash.com/photo-1558369981-f9ca78462e61?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=794&q=80".into()),
            facebook_link: None,
            website: None,
            seeking_venue: false,
            seeking_description: None,
        },
    ]
}

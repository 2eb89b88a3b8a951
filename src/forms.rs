//! Form parsing and validation.
//!
//! A form struct keeps what the user typed so it can be rendered back with
//! errors. `validate` turns it into a record the catalog can write.

use std::fmt::{self, Display};

use chrono::NaiveDateTime;
use entity::{artist, venue};
use url::Url;

use crate::format::parse_datetime;

pub mod choices;

pub use choices::{SelectOption, GENRES, STATES};

/// Raw `application/x-www-form-urlencoded` pairs. Keys may repeat.
#[derive(Clone, Debug, Default)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        FormData { fields }
    }

    /// First value sent for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Trimmed first value, empty if missing
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(str::trim).unwrap_or_default().to_string()
    }

    /// Every non-empty value sent for `key`, in submission order
    pub fn all(&self, key: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter(|(name, _)| name == key)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .map(String::from)
            .collect()
    }

    /// Checkbox semantics: absent, `""` and `"false"` are unchecked.
    pub fn checked(&self, key: &str) -> bool {
        match self.get(key) {
            Some(value) => {
                let value = value.trim();
                !value.is_empty() && !value.eq_ignore_ascii_case("false")
            }
            None => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid form")?;
        for (index, error) in self.errors.iter().enumerate() {
            let separator = if index == 0 { ": " } else { ", " };
            write!(f, "{separator}{} {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Collects field errors while pulling clean values out of a form.
#[derive(Default)]
struct Checker {
    errors: ValidationErrors,
}

impl Checker {
    fn required(&mut self, field: &'static str, value: &str) -> String {
        let value = value.trim();
        if value.is_empty() {
            self.errors.add(field, "is required");
        }
        value.to_string()
    }

    fn state(&mut self, value: &str) -> String {
        let value = self.required("state", value);
        if !value.is_empty() && !STATES.contains(&value.as_str()) {
            self.errors.add("state", "is not a valid choice");
        }
        value
    }

    fn genres(&mut self, values: &[String]) -> Vec<String> {
        if values.is_empty() {
            self.errors.add("genres", "select at least one genre");
        }
        for value in values {
            if !GENRES.contains(&value.as_str()) {
                self.errors
                    .add("genres", format!("\"{value}\" is not a valid choice"));
            }
        }
        values.to_vec()
    }

    fn phone(&mut self, value: &str) -> Option<String> {
        let value = optional(value)?;
        let allowed = value
            .chars()
            .all(|c| c.is_ascii_digit() || " ()+-.".contains(c));
        let digits = value.chars().filter(char::is_ascii_digit).count();
        if !allowed || !(7..=15).contains(&digits) {
            self.errors.add("phone", "is not a valid phone number");
        }
        Some(value)
    }

    fn link(&mut self, field: &'static str, value: &str) -> Option<String> {
        let value = optional(value)?;
        match Url::parse(&value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            _ => self.errors.add(field, "is not a valid URL"),
        }
        Some(value)
    }

    fn id(&mut self, field: &'static str, value: &str) -> i32 {
        let value = self.required(field, value);
        if value.is_empty() {
            return 0;
        }
        match value.parse::<i32>() {
            Ok(id) if id > 0 => id,
            _ => {
                self.errors.add(field, "must be a positive number");
                0
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// A venue ready to be written. Every field overwrites what is stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VenueRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn from_form(data: &FormData) -> Self {
        VenueForm {
            name: data.text("name"),
            city: data.text("city"),
            state: data.text("state"),
            address: data.text("address"),
            phone: data.text("phone"),
            genres: data.all("genres"),
            image_link: data.text("image_link"),
            facebook_link: data.text("facebook_link"),
            website_link: data.text("website_link"),
            seeking_talent: data.checked("seeking_talent"),
            seeking_description: data.text("seeking_description"),
        }
    }

    pub fn from_model(venue: &venue::Model, genres: Vec<String>) -> Self {
        VenueForm {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            genres,
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<VenueRecord, ValidationErrors> {
        let mut checker = Checker::default();
        let record = VenueRecord {
            name: checker.required("name", &self.name),
            city: checker.required("city", &self.city),
            state: checker.state(&self.state),
            address: checker.required("address", &self.address),
            phone: checker.phone(&self.phone),
            genres: checker.genres(&self.genres),
            image_link: checker.link("image_link", &self.image_link),
            facebook_link: checker.link("facebook_link", &self.facebook_link),
            website: checker.link("website_link", &self.website_link),
            seeking_talent: self.seeking_talent,
            seeking_description: optional(&self.seeking_description),
        };
        checker.finish(record)
    }

    pub fn state_options(&self) -> Vec<SelectOption> {
        choices::options(&STATES, [self.state.as_str()])
    }

    pub fn genre_options(&self) -> Vec<SelectOption> {
        choices::options(&GENRES, self.genres.iter().map(String::as_str))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtistRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_form(data: &FormData) -> Self {
        ArtistForm {
            name: data.text("name"),
            city: data.text("city"),
            state: data.text("state"),
            phone: data.text("phone"),
            genres: data.all("genres"),
            image_link: data.text("image_link"),
            facebook_link: data.text("facebook_link"),
            website_link: data.text("website_link"),
            seeking_venue: data.checked("seeking_venue"),
            seeking_description: data.text("seeking_description"),
        }
    }

    pub fn from_model(artist: &artist::Model, genres: Vec<String>) -> Self {
        ArtistForm {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            genres,
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ArtistRecord, ValidationErrors> {
        let mut checker = Checker::default();
        let record = ArtistRecord {
            name: checker.required("name", &self.name),
            city: checker.required("city", &self.city),
            state: checker.state(&self.state),
            phone: checker.phone(&self.phone),
            genres: checker.genres(&self.genres),
            image_link: checker.link("image_link", &self.image_link),
            facebook_link: checker.link("facebook_link", &self.facebook_link),
            website: checker.link("website_link", &self.website_link),
            seeking_venue: self.seeking_venue,
            seeking_description: optional(&self.seeking_description),
        };
        checker.finish(record)
    }

    pub fn state_options(&self) -> Vec<SelectOption> {
        choices::options(&STATES, [self.state.as_str()])
    }

    pub fn genre_options(&self) -> Vec<SelectOption> {
        choices::options(&GENRES, self.genres.iter().map(String::as_str))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowRecord {
    pub artist_id: i32,
    pub venue_id: i32,
    /// `None` means "now" at insert time
    pub start_time: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    pub fn from_form(data: &FormData) -> Self {
        ShowForm {
            artist_id: data.text("artist_id"),
            venue_id: data.text("venue_id"),
            start_time: data.text("start_time"),
        }
    }

    /// Empty form with the start time prefilled.
    pub fn starting_at(start_time: NaiveDateTime) -> Self {
        ShowForm {
            start_time: start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<ShowRecord, ValidationErrors> {
        let mut checker = Checker::default();
        let artist_id = checker.id("artist_id", &self.artist_id);
        let venue_id = checker.id("venue_id", &self.venue_id);
        let start_time = match optional(&self.start_time) {
            Some(value) => {
                let parsed = parse_datetime(&value);
                if parsed.is_none() {
                    checker
                        .errors
                        .add("start_time", "must look like 2024-05-21 21:30:00");
                }
                parsed
            }
            None => None,
        };
        checker.finish(ShowRecord {
            artist_id,
            venue_id,
            start_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(fields: &[(&str, &str)]) -> FormData {
        FormData::new(
            fields
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    fn venue_fields() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "The Musical Hop"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("genres", "Blues"),
            ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
            ("image_link", ""),
            ("website_link", "https://www.themusicalhop.com"),
            ("seeking_talent", "y"),
            ("seeking_description", "  Looking for local artists  "),
        ]
    }

    #[test]
    fn valid_venue_form() {
        let form = VenueForm::from_form(&pairs(&venue_fields()));
        let record = form.validate().unwrap();
        assert_eq!(record.name, "The Musical Hop");
        assert_eq!(record.genres, vec!["Jazz", "Blues"]);
        assert_eq!(record.image_link, None);
        assert_eq!(record.website.as_deref(), Some("https://www.themusicalhop.com"));
        assert!(record.seeking_talent);
        assert_eq!(
            record.seeking_description.as_deref(),
            Some("Looking for local artists")
        );
    }

    #[test]
    fn missing_name_is_rejected() {
        let fields: Vec<_> = venue_fields()
            .into_iter()
            .filter(|(key, _)| *key != "name")
            .collect();
        let errors = VenueForm::from_form(&pairs(&fields)).validate().unwrap_err();
        assert!(errors.has("name"));
        assert!(!errors.has("city"));
    }

    #[test]
    fn every_problem_is_reported() {
        let errors = VenueForm::from_form(&pairs(&[
            ("state", "XX"),
            ("genres", "Polka"),
            ("phone", "call me"),
            ("facebook_link", "facebook"),
        ]))
        .validate()
        .unwrap_err();
        for field in ["name", "city", "state", "address", "genres", "phone", "facebook_link"] {
            assert!(errors.has(field), "expected an error for {field}");
        }
    }

    #[test]
    fn genres_are_required() {
        let fields: Vec<_> = venue_fields()
            .into_iter()
            .filter(|(key, _)| *key != "genres")
            .collect();
        let errors = VenueForm::from_form(&pairs(&fields)).validate().unwrap_err();
        assert!(errors.has("genres"));
    }

    #[test]
    fn checkbox_semantics() {
        let form = pairs(&[("a", "y"), ("b", ""), ("c", "false"), ("d", "on")]);
        assert!(form.checked("a"));
        assert!(!form.checked("b"));
        assert!(!form.checked("c"));
        assert!(form.checked("d"));
        assert!(!form.checked("missing"));
    }

    #[test]
    fn omitted_artist_fields_fall_back_to_form_defaults() {
        let record = ArtistForm::from_form(&pairs(&[
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("genres", "Rock n Roll"),
        ]))
        .validate()
        .unwrap();
        assert_eq!(record.phone, None);
        assert_eq!(record.website, None);
        assert!(!record.seeking_venue);
        assert_eq!(record.seeking_description, None);
    }

    #[test]
    fn selected_options_follow_the_form() {
        let form = ArtistForm {
            state: "NY".into(),
            genres: vec!["Jazz".into(), "Soul".into()],
            ..Default::default()
        };
        let states = form.state_options();
        assert_eq!(states.len(), STATES.len());
        assert_eq!(
            states.iter().filter(|o| o.selected).map(|o| o.value).collect::<Vec<_>>(),
            vec!["NY"]
        );
        let genres = form.genre_options();
        assert_eq!(
            genres.iter().filter(|o| o.selected).map(|o| o.value).collect::<Vec<_>>(),
            vec!["Jazz", "Soul"]
        );
    }

    #[test]
    fn show_form() {
        let record = ShowForm::from_form(&pairs(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01 20:00:00"),
        ]))
        .validate()
        .unwrap();
        assert_eq!(record.artist_id, 4);
        assert_eq!(record.venue_id, 1);
        assert!(record.start_time.is_some());

        let record = ShowForm::from_form(&pairs(&[("artist_id", "4"), ("venue_id", "1")]))
            .validate()
            .unwrap();
        assert_eq!(record.start_time, None);

        let errors = ShowForm::from_form(&pairs(&[
            ("artist_id", "four"),
            ("venue_id", "-1"),
            ("start_time", "tomorrow"),
        ]))
        .validate()
        .unwrap_err();
        assert!(errors.has("artist_id"));
        assert!(errors.has("venue_id"));
        assert!(errors.has("start_time"));
    }

    #[test]
    fn errors_display_every_field() {
        let mut errors = ValidationErrors::default();
        errors.add("name", "is required");
        errors.add("genres", "select at least one genre");
        assert_eq!(
            errors.to_string(),
            "invalid form: name is required, genres select at least one genre"
        );
    }
}

//! Page view models, one per template under `templates/`.

use askama::Template;
use axum::response::Html;
use entity::artist;

use super::error::AppError;
use super::flash::Flash;
use crate::database::view::{Area, ArtistDetail, SearchResults, ShowListing, VenueDetail};
use crate::forms::{ArtistForm, ShowForm, ValidationErrors, VenueForm};

pub fn render<T: Template>(page: &T) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomePage {
    pub flash: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "pages/venues.html")]
pub struct VenuesPage {
    pub flash: Vec<Flash>,
    pub areas: Vec<Area>,
}

#[derive(Template)]
#[template(path = "pages/show_venue.html")]
pub struct VenuePage {
    pub flash: Vec<Flash>,
    pub venue: VenueDetail,
}

#[derive(Template)]
#[template(path = "pages/artists.html")]
pub struct ArtistsPage {
    pub flash: Vec<Flash>,
    pub artists: Vec<artist::Model>,
}

#[derive(Template)]
#[template(path = "pages/show_artist.html")]
pub struct ArtistPage {
    pub flash: Vec<Flash>,
    pub artist: ArtistDetail,
}

/// Search results for venues or artists; `section` is the URL prefix.
#[derive(Template)]
#[template(path = "pages/search.html")]
pub struct SearchPage {
    pub flash: Vec<Flash>,
    pub section: &'static str,
    pub search_term: String,
    pub results: SearchResults,
}

#[derive(Template)]
#[template(path = "pages/shows.html")]
pub struct ShowsPage {
    pub flash: Vec<Flash>,
    pub shows: Vec<ShowListing>,
}

/// New and edit venue forms.
#[derive(Template)]
#[template(path = "forms/venue.html")]
pub struct VenueFormPage {
    pub flash: Vec<Flash>,
    pub title: String,
    pub action: String,
    pub form: VenueForm,
    pub errors: ValidationErrors,
}

#[derive(Template)]
#[template(path = "forms/artist.html")]
pub struct ArtistFormPage {
    pub flash: Vec<Flash>,
    pub title: String,
    pub action: String,
    pub form: ArtistForm,
    pub errors: ValidationErrors,
}

#[derive(Template)]
#[template(path = "forms/new_show.html")]
pub struct ShowFormPage {
    pub flash: Vec<Flash>,
    pub form: ShowForm,
    pub errors: ValidationErrors,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundPage {
    pub flash: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "errors/500.html")]
pub struct ServerErrorPage {
    pub flash: Vec<Flash>,
}

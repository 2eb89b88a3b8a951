use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use log::{error, warn};

use super::error::AppError;
use super::flash::{Flash, IncomingFlash, SetFlash};
use super::pages::home_with;
use super::templates::{render, ArtistFormPage, ArtistPage, ArtistsPage, SearchPage};
use super::venues::SearchForm;
use super::{parse_id, AppState};
use crate::forms::{ArtistForm, FormData, ValidationErrors};
use crate::schedule;

pub async fn index(
    State(state): State<AppState>,
    mut flash: IncomingFlash,
) -> Result<(IncomingFlash, Html<String>), AppError> {
    let artists = state.catalog.artists().await?;
    let page = ArtistsPage {
        flash: flash.take(),
        artists,
    };
    Ok((flash, render(&page)?))
}

pub async fn search(
    State(state): State<AppState>,
    mut flash: IncomingFlash,
    Form(form): Form<SearchForm>,
) -> Result<(IncomingFlash, Html<String>), AppError> {
    let results = state
        .catalog
        .search_artists(&form.search_term, schedule::now())
        .await?;
    let page = SearchPage {
        flash: flash.take(),
        section: "artists",
        search_term: form.search_term,
        results,
    };
    Ok((flash, render(&page)?))
}

pub async fn show(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    mut flash: IncomingFlash,
) -> Result<(IncomingFlash, Html<String>), AppError> {
    let artist_id = parse_id(&artist_id)?;
    let artist = state
        .catalog
        .artist_detail(artist_id, schedule::now())
        .await?;
    let page = ArtistPage {
        flash: flash.take(),
        artist,
    };
    Ok((flash, render(&page)?))
}

fn artist_page(
    flash: Vec<Flash>,
    artist_id: Option<i32>,
    form: ArtistForm,
    errors: ValidationErrors,
) -> ArtistFormPage {
    let (title, action) = match artist_id {
        Some(id) => (format!("Edit artist {}", form.name), format!("/artists/{id}/edit")),
        None => ("List a new artist".to_string(), "/artists/create".to_string()),
    };
    ArtistFormPage {
        flash,
        title,
        action,
        form,
        errors,
    }
}

pub async fn create_form(
    mut flash: IncomingFlash,
) -> Result<(IncomingFlash, Html<String>), AppError> {
    let page = artist_page(flash.take(), None, ArtistForm::default(), ValidationErrors::default());
    Ok((flash, render(&page)?))
}

pub async fn create(
    State(state): State<AppState>,
    mut flash: IncomingFlash,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = ArtistForm::from_form(&FormData::new(fields));
    let record = match form.validate() {
        Ok(record) => record,
        Err(errors) => {
            warn!("Artist form rejected: {errors}");
            let mut messages = flash.take();
            messages.push(Flash::error(format!(
                "An error occurred. Artist {} could not be listed.",
                form.name
            )));
            let page = artist_page(messages, None, form, errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, flash, render(&page)?).into_response());
        }
    };

    let name = record.name.clone();
    let message = match state.catalog.create_artist(record).await {
        Ok(artist) => Flash::success(format!("Artist {} was successfully listed!", artist.name)),
        Err(err) => {
            error!("Could not list artist {name}: {err}");
            Flash::error(format!("An error occurred. Artist {name} could not be listed."))
        }
    };
    home_with(flash, message)
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    mut flash: IncomingFlash,
) -> Result<(IncomingFlash, Html<String>), AppError> {
    let artist_id = parse_id(&artist_id)?;
    let artist = state.catalog.artist(artist_id).await?;
    let genres = state.catalog.artist_genres(artist_id).await?;
    let form = ArtistForm::from_model(&artist, genres);
    let page = artist_page(flash.take(), Some(artist_id), form, ValidationErrors::default());
    Ok((flash, render(&page)?))
}

/// Overwrites every field, including the ones left out of the submission.
pub async fn edit(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    mut flash: IncomingFlash,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let artist_id = parse_id(&artist_id)?;
    // Unknown ids are a 404 whatever the submission holds
    state.catalog.artist(artist_id).await?;
    let form = ArtistForm::from_form(&FormData::new(fields));
    let record = match form.validate() {
        Ok(record) => record,
        Err(errors) => {
            warn!("Artist {artist_id} edit rejected: {errors}");
            let mut messages = flash.take();
            messages.push(Flash::error(format!(
                "Artist {} could not be updated.",
                form.name
            )));
            let page = artist_page(messages, Some(artist_id), form, errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, flash, render(&page)?).into_response());
        }
    };

    let name = record.name.clone();
    let message = match state.catalog.update_artist(artist_id, record).await {
        Ok(artist) => Flash::success(format!("Artist {} was successfully updated!", artist.name)),
        Err(err) if err.is_not_found() => return Err(err.into()),
        Err(err) => {
            error!("Could not update artist {artist_id}: {err}");
            Flash::error(format!("Artist {name} could not be updated."))
        }
    };
    Ok((SetFlash(message), Redirect::to(&format!("/artists/{artist_id}"))).into_response())
}

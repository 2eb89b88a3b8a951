use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use log::{error, warn};
use serde::Deserialize;

use super::error::AppError;
use super::flash::{Flash, IncomingFlash, SetFlash};
use super::pages::home_with;
use super::templates::{render, SearchPage, VenueFormPage, VenuePage, VenuesPage};
use super::{parse_id, AppState};
use crate::forms::{FormData, ValidationErrors, VenueForm};
use crate::schedule;

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

pub async fn index(
    State(state): State<AppState>,
    mut flash: IncomingFlash,
) -> Result<(IncomingFlash, Html<String>), AppError> {
    let areas = state.catalog.venue_areas(schedule::now()).await?;
    let page = VenuesPage {
        flash: flash.take(),
        areas,
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
        .search_venues(&form.search_term, schedule::now())
        .await?;
    let page = SearchPage {
        flash: flash.take(),
        section: "venues",
        search_term: form.search_term,
        results,
    };
    Ok((flash, render(&page)?))
}

pub async fn show(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    mut flash: IncomingFlash,
) -> Result<(IncomingFlash, Html<String>), AppError> {
    let venue_id = parse_id(&venue_id)?;
    let venue = state
        .catalog
        .venue_detail(venue_id, schedule::now())
        .await?;
    let page = VenuePage {
        flash: flash.take(),
        venue,
    };
    Ok((flash, render(&page)?))
}

fn new_venue_page(flash: Vec<Flash>, form: VenueForm, errors: ValidationErrors) -> VenueFormPage {
    VenueFormPage {
        flash,
        title: "List a new venue".to_string(),
        action: "/venues/create".to_string(),
        form,
        errors,
    }
}

fn edit_venue_page(
    flash: Vec<Flash>,
    venue_id: i32,
    form: VenueForm,
    errors: ValidationErrors,
) -> VenueFormPage {
    VenueFormPage {
        flash,
        title: format!("Edit venue {}", form.name),
        action: format!("/venues/{venue_id}/edit"),
        form,
        errors,
    }
}

pub async fn create_form(
    mut flash: IncomingFlash,
) -> Result<(IncomingFlash, Html<String>), AppError> {
    let page = new_venue_page(flash.take(), VenueForm::default(), ValidationErrors::default());
    Ok((flash, render(&page)?))
}

pub async fn create(
    State(state): State<AppState>,
    mut flash: IncomingFlash,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = VenueForm::from_form(&FormData::new(fields));
    let record = match form.validate() {
        Ok(record) => record,
        Err(errors) => {
            warn!("Venue form rejected: {errors}");
            let mut messages = flash.take();
            messages.push(Flash::error(format!(
                "An error occurred. Venue {} could not be listed.",
                form.name
            )));
            let page = new_venue_page(messages, form, errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, flash, render(&page)?).into_response());
        }
    };

    let name = record.name.clone();
    let message = match state.catalog.create_venue(record).await {
        Ok(venue) => Flash::success(format!("Venue {} was successfully listed!", venue.name)),
        Err(err) => {
            error!("Could not list venue {name}: {err}");
            Flash::error(format!("An error occurred. Venue {name} could not be listed."))
        }
    };
    home_with(flash, message)
}

/// Deletes and goes home. A missing venue is reported, not raised.
pub async fn delete(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> Result<Response, AppError> {
    let venue_id = parse_id(&venue_id)?;
    let message = match state.catalog.delete_venue(venue_id).await {
        Ok(venue) => Flash::success(format!("Venue {} was successfully deleted!", venue.name)),
        Err(err) => {
            warn!("Could not delete venue {venue_id}: {err}");
            Flash::error("Venue was not successfully deleted.")
        }
    };
    Ok((SetFlash(message), Redirect::to("/")).into_response())
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    mut flash: IncomingFlash,
) -> Result<(IncomingFlash, Html<String>), AppError> {
    let venue_id = parse_id(&venue_id)?;
    let venue = state.catalog.venue(venue_id).await?;
    let genres = state.catalog.venue_genres(venue_id).await?;
    let form = VenueForm::from_model(&venue, genres);
    let page = edit_venue_page(flash.take(), venue_id, form, ValidationErrors::default());
    Ok((flash, render(&page)?))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    mut flash: IncomingFlash,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let venue_id = parse_id(&venue_id)?;
    // Unknown ids are a 404 whatever the submission holds
    state.catalog.venue(venue_id).await?;
    let form = VenueForm::from_form(&FormData::new(fields));
    let record = match form.validate() {
        Ok(record) => record,
        Err(errors) => {
            warn!("Venue {venue_id} edit rejected: {errors}");
            let mut messages = flash.take();
            messages.push(Flash::error(format!(
                "Venue {} could not be updated.",
                form.name
            )));
            let page = edit_venue_page(messages, venue_id, form, errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, flash, render(&page)?).into_response());
        }
    };

    let name = record.name.clone();
    let message = match state.catalog.update_venue(venue_id, record).await {
        Ok(venue) => Flash::success(format!("Venue {} was successfully updated!", venue.name)),
        Err(err) if err.is_not_found() => return Err(err.into()),
        Err(err) => {
            error!("Could not update venue {venue_id}: {err}");
            Flash::error(format!("Venue {name} could not be updated."))
        }
    };
    Ok((SetFlash(message), Redirect::to(&format!("/venues/{venue_id}"))).into_response())
}

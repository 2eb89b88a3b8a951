use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use log::{error, warn};

use super::error::AppError;
use super::flash::{Flash, IncomingFlash};
use super::pages::home_with;
use super::templates::{render, ShowFormPage, ShowsPage};
use super::AppState;
use crate::forms::{FormData, ShowForm, ValidationErrors};
use crate::schedule;

pub async fn index(
    State(state): State<AppState>,
    mut flash: IncomingFlash,
) -> Result<(IncomingFlash, Html<String>), AppError> {
    let shows = state.catalog.shows().await?;
    let page = ShowsPage {
        flash: flash.take(),
        shows,
    };
    Ok((flash, render(&page)?))
}

pub async fn create_form(
    mut flash: IncomingFlash,
) -> Result<(IncomingFlash, Html<String>), AppError> {
    let page = ShowFormPage {
        flash: flash.take(),
        form: ShowForm::starting_at(schedule::now()),
        errors: ValidationErrors::default(),
    };
    Ok((flash, render(&page)?))
}

/// Unknown venue or artist ids end up as a failure message, not an error page.
pub async fn create(
    State(state): State<AppState>,
    mut flash: IncomingFlash,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = ShowForm::from_form(&FormData::new(fields));
    let record = match form.validate() {
        Ok(record) => record,
        Err(errors) => {
            warn!("Show form rejected: {errors}");
            let mut messages = flash.take();
            messages.push(Flash::error("Show was not successfully added."));
            let page = ShowFormPage {
                flash: messages,
                form,
                errors,
            };
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, flash, render(&page)?).into_response());
        }
    };

    let message = match state.catalog.create_show(record).await {
        Ok(_) => Flash::success("Show was successfully listed!"),
        Err(err) if err.is_not_found() => {
            warn!("Show not listed: {err}");
            Flash::error("Show was not successfully added.")
        }
        Err(err) => {
            error!("Could not list show: {err}");
            Flash::error("Show was not successfully added.")
        }
    };
    home_with(flash, message)
}

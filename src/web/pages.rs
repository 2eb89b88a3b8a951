use axum::response::{Html, IntoResponse, Response};

use super::error::AppError;
use super::flash::{Flash, IncomingFlash};
use super::templates::{render, HomePage};

pub async fn index(mut flash: IncomingFlash) -> Result<(IncomingFlash, Html<String>), AppError> {
    let page = HomePage {
        flash: flash.take(),
    };
    Ok((flash, render(&page)?))
}

pub async fn not_found() -> AppError {
    AppError::not_found("no such page")
}

/// Where a create submission lands, with the outcome on top.
pub(crate) fn home_with(mut flash: IncomingFlash, message: Flash) -> Result<Response, AppError> {
    let mut messages = flash.take();
    messages.push(message);
    let page = HomePage { flash: messages };
    Ok((flash, render(&page)?).into_response())
}

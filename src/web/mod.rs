//! HTTP surface: routes, handlers and the pages they render.

use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use log::info;
use tokio::time::Instant;

use crate::database::Catalog;

pub mod artists;
pub mod error;
pub mod flash;
pub mod pages;
pub mod shows;
pub mod templates;
pub mod venues;

pub use error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        AppState {
            catalog: Arc::new(catalog),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        // Venues
        .route("/venues", get(venues::index))
        .route("/venues/search", post(venues::search))
        .route("/venues/create", get(venues::create_form).post(venues::create))
        .route("/venues/:venue_id", get(venues::show))
        .route("/venues/:venue_id/delete", get(venues::delete))
        .route("/venues/:venue_id/edit", get(venues::edit_form).post(venues::edit))
        // Artists
        .route("/artists", get(artists::index))
        .route("/artists/search", post(artists::search))
        .route("/artists/create", get(artists::create_form).post(artists::create))
        .route("/artists/:artist_id", get(artists::show))
        .route("/artists/:artist_id/edit", get(artists::edit_form).post(artists::edit))
        // Shows
        .route("/shows", get(shows::index))
        .route("/shows/create", get(shows::create_form).post(shows::create))
        .fallback(pages::not_found)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();
    let response = next.run(request).await;
    info!(
        "{method} {path} {} ({} ms)",
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}

/// Ids in paths that are not numbers are treated like unknown ids.
pub(crate) fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::not_found(format!("no record with id \"{raw}\"")))
}

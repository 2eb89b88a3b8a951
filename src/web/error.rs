//! Errors that end a request with an error page.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::{error, warn};
use std::fmt;

use super::templates::{NotFoundPage, ServerErrorPage};
use crate::error::CatalogError;

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    /// For the log, never shown to the user
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        AppError {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for AppError {}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => AppError::not_found(err.to_string()),
            CatalogError::Validation(_) => {
                AppError::new(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            CatalogError::Database(_) => AppError::internal(err.to_string()),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::internal(format!("template error: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let page = if self.status == StatusCode::NOT_FOUND {
            warn!("{}", self);
            NotFoundPage { flash: vec![] }.render()
        } else {
            error!("{}", self);
            ServerErrorPage { flash: vec![] }.render()
        };
        match page {
            Ok(body) => (self.status, Html(body)).into_response(),
            Err(err) => {
                error!("Could not render error page: {err}");
                (self.status, self.status.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::from(CatalogError::not_found("Artist", 7));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "[404] Artist with id 7 not found");
    }

    #[test]
    fn database_errors_map_to_500() {
        let err = AppError::from(CatalogError::from(DbErr::Custom("locked".into())));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_pages_render() {
        let response = AppError::not_found("nothing here").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = AppError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

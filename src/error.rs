use sea_orm::DbErr;
use thiserror::Error;

use crate::forms::ValidationErrors;

/// Everything that can go wrong between a submitted form and the store.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The form did not pass validation, nothing was written.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    /// The write was rolled back.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl CatalogError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        CatalogError::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

/// Shorthand for Result
pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_record() {
        let err = CatalogError::not_found("Venue", 42);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Venue with id 42 not found");
    }

    #[test]
    fn database_errors_are_not_not_found() {
        let err = CatalogError::from(DbErr::Custom("disk full".into()));
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "database error: Custom Error: disk full");
    }
}

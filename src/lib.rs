pub mod config;
pub mod database;
pub mod error;
pub mod format;
pub mod forms;
pub mod schedule;
pub mod web;

pub use config::Config;
pub use database::Catalog;
pub use error::{CatalogError, Result};

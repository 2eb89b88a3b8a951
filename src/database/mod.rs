use std::future::Future;
use std::pin::Pin;

use log::{error, warn};
use migration::MigratorTrait;
use sea_orm::{
    prelude::*, ConnectOptions, Database, DatabaseTransaction, TransactionTrait,
};

use crate::config::Config;
use crate::error::Result;

pub mod delete;
pub mod genres;
pub mod insert;
pub mod seed;
pub mod select;
pub mod update;
pub mod view;

/// The booking catalog: venues, artists and the shows linking them.
pub struct Catalog {
    database: DatabaseConnection,
}

/// A unit of work run inside [`Catalog::scoped_write`].
pub type WriteFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'c>>;

impl Catalog {
    pub async fn try_new(config: &Config) -> Result<Catalog> {
        let mut database_options = ConnectOptions::new(config.database_url.clone());
        database_options
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);
        if let Some(max_connections) = config.max_connections {
            database_options
                .max_connections(max_connections)
                .min_connections(max_connections);
        }

        let database = Database::connect(database_options).await?;
        migration::Migrator::up(&database, None).await?;
        Ok(Catalog { database })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.database
    }

    /// Runs `operation` in its own transaction.
    ///
    /// Commits when the operation succeeds and rolls back when it fails.
    /// The transaction is never left open: if the future is dropped
    /// half way, dropping the transaction rolls it back as well.
    pub async fn scoped_write<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send,
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> WriteFuture<'c, T> + Send,
    {
        let transaction = self.database.begin().await?;
        match operation(&transaction).await {
            Ok(value) => {
                transaction.commit().await?;
                Ok(value)
            }
            Err(err) => {
                warn!("Rolling back write: {err}");
                if let Err(rollback_err) = transaction.rollback().await {
                    error!("Could not roll back write: {rollback_err}");
                }
                Err(err)
            }
        }
    }
}

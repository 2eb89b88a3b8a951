use super::Catalog;
use entity::{artist, venue};
use sea_orm::prelude::*;
use sea_orm::EntityTrait;

use crate::error::{CatalogError, Result};

impl Catalog {
    pub async fn model_related<M, R>(&self, model: &M) -> Result<Vec<R::Model>, DbErr>
    where
        M: ModelTrait,
        R: EntityTrait,
        M::Entity: Related<R>,
    {
        model
            .find_related::<R>(R::default())
            .all(&self.database)
            .await
    }

    pub async fn find_all<E>(&self) -> Result<Vec<E::Model>, DbErr>
    where
        E: EntityTrait,
    {
        E::find().all(&self.database).await
    }

    /// Lookup by primary key. Absence is a value, not an error.
    pub async fn find_by_id<E>(&self, id: i32) -> Result<Option<E::Model>, DbErr>
    where
        E: EntityTrait,
        i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id).one(&self.database).await
    }

    pub async fn venue(&self, id: i32) -> Result<venue::Model> {
        self.find_by_id::<venue::Entity>(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Venue", id))
    }

    pub async fn artist(&self, id: i32) -> Result<artist::Model> {
        self.find_by_id::<artist::Entity>(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Artist", id))
    }
}

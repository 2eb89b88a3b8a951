pub use sea_orm_migration::prelude::*;

mod m20240901_venue;
mod m20240902_artist;
mod m20240903_show;
mod m20240904_venue_genre;
mod m20240905_artist_genre;
pub mod types;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_venue::Migration),
            Box::new(m20240902_artist::Migration),
            Box::new(m20240903_show::Migration),
            Box::new(m20240904_venue_genre::Migration),
            Box::new(m20240905_artist_genre::Migration),
        ]
    }
}

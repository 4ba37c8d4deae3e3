use sea_orm_migration::async_trait;
pub use sea_orm_migration::{MigrationTrait, MigratorTrait};

mod m001_create_character_table;
mod m002_create_place_and_boss_tables;

pub struct Migrator;

/// Creates every catalog table on both SQLite and PostgreSQL backends.
#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m001_create_character_table::Migration),
            Box::new(m002_create_place_and_boss_tables::Migration),
        ]
    }
}

//! Crate for accessing the database of the Hyrule catalog.
//!
//! [`HyruleDb`] implements every store trait of `hyrule-db-api` on top of SeaORM and
//! works against either SQLite or PostgreSQL.

pub mod bosses;
pub mod characters;
pub mod db;
pub mod errors;
pub mod places;

pub use hyrule_db_api::{HyruleDbAllOperations, SharedStore};
pub use sea_orm::DatabaseConnection;

pub use crate::{
    db::{HyruleDb, HyruleDbConfig},
    errors::{DbSqlError, Result},
};


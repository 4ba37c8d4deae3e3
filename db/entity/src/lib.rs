//! SeaORM bindings for the Hyrule catalog tables.
//!
//! Each module mirrors one table created by the `migration` crate. Conversions into
//! the store-agnostic entries of `hyrule-db-api` live in [`conversions`].

pub mod boss;
pub mod character;
pub mod conversions;
pub mod place;

pub mod prelude {
    pub use super::{boss::Entity as Boss, character::Entity as Character, place::Entity as Place};
}

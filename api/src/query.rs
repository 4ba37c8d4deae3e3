//! GraphQL query root and resolver implementations

use async_graphql::{Context, ErrorExtensions, Object, Result};
use hyrule_api_types::{Boss, Character, Place};
use hyrule_db_api::SharedStore;

use crate::{
    conversions::{boss_from_entry, character_from_entry, place_from_entry},
    errors::CatalogError,
};

/// Root query type providing read-only access to the catalog
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All characters, in store order
    #[graphql(name = "listCharacters")]
    async fn list_characters(&self, ctx: &Context<'_>) -> Result<Vec<Character>> {
        let store = ctx.data::<SharedStore>()?;

        let entries = store
            .find_all_characters()
            .await
            .map_err(|e| CatalogError::from_store("listCharacters", e).extend())?;

        Ok(entries.into_iter().map(character_from_entry).collect())
    }

    /// All places, in store order
    #[graphql(name = "listPlaces")]
    async fn list_places(&self, ctx: &Context<'_>) -> Result<Vec<Place>> {
        let store = ctx.data::<SharedStore>()?;

        let entries = store
            .find_all_places()
            .await
            .map_err(|e| CatalogError::from_store("listPlaces", e).extend())?;

        Ok(entries.into_iter().map(place_from_entry).collect())
    }

    /// All bosses, in store order
    #[graphql(name = "listBosses")]
    async fn list_bosses(&self, ctx: &Context<'_>) -> Result<Vec<Boss>> {
        let store = ctx.data::<SharedStore>()?;

        let entries = store
            .find_all_bosses()
            .await
            .map_err(|e| CatalogError::from_store("listBosses", e).extend())?;

        Ok(entries.into_iter().map(boss_from_entry).collect())
    }

    /// Health check query
    ///
    /// Always returns "ok" once the schema is serving requests
    async fn health(&self) -> &str {
        "ok"
    }

    /// API version information
    ///
    /// Returns the current version of the hyrule-api package
    async fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }
}

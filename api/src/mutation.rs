//! GraphQL mutation root and resolver implementations
//!
//! Every mutation validates its arguments first and then makes exactly one store call.
//! Inputs that fail validation never reach the store.

use async_graphql::{Context, ErrorExtensions, Object, Result};
use hyrule_api_types::{Character, CharacterCreateInput, Place, PlaceCreateInput};
use hyrule_db_api::SharedStore;
use tracing::debug;

use crate::{
    conversions::{character_fields, character_from_entry, place_fields, place_from_entry},
    errors::CatalogError,
    validation::{validate_id, validate_input},
};

/// Root mutation type providing write access to characters and places
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a place
    ///
    /// The store assigns the id. Fails with VALIDATION_ERROR if name or description is blank.
    #[graphql(name = "createPlace")]
    async fn create_place(&self, ctx: &Context<'_>, data: PlaceCreateInput) -> Result<Place> {
        validate_input(&data).map_err(|e| e.extend())?;
        let store = ctx.data::<SharedStore>()?;

        let entry = store
            .create_place(place_fields(data))
            .await
            .map_err(|e| CatalogError::from_store("createPlace", e).extend())?;

        debug!(id = entry.id, "place created");
        Ok(place_from_entry(entry))
    }

    /// Create a character
    ///
    /// Fails with VALIDATION_ERROR if name or description is blank.
    #[graphql(name = "createCharacter")]
    async fn create_character(&self, ctx: &Context<'_>, data: CharacterCreateInput) -> Result<Option<Character>> {
        validate_input(&data).map_err(|e| e.extend())?;
        let store = ctx.data::<SharedStore>()?;

        let entry = store
            .create_character(character_fields(data))
            .await
            .map_err(|e| CatalogError::from_store("createCharacter", e).extend())?;

        debug!(id = entry.id, "character created");
        Ok(Some(character_from_entry(entry)))
    }

    /// Replace every field of an existing character
    ///
    /// Fails with NOT_FOUND if no character has the given id. An id of 0 means the id is
    /// absent and fails with VALIDATION_ERROR.
    #[graphql(name = "updateCharacter")]
    async fn update_character(
        &self,
        ctx: &Context<'_>,
        id: i32,
        data: CharacterCreateInput,
    ) -> Result<Option<Character>> {
        validate_id("id", id).map_err(|e| e.extend())?;
        validate_input(&data).map_err(|e| e.extend())?;
        let store = ctx.data::<SharedStore>()?;

        let entry = store
            .update_character(id, character_fields(data))
            .await
            .map_err(|e| CatalogError::from_store("updateCharacter", e).extend())?;

        debug!(id, "character updated");
        Ok(Some(character_from_entry(entry)))
    }

    /// Delete a character and return the removed record
    ///
    /// Fails with NOT_FOUND if no character has the given id.
    #[graphql(name = "deleteCharacter")]
    async fn delete_character(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Character>> {
        let store = ctx.data::<SharedStore>()?;

        let entry = store
            .delete_character(id)
            .await
            .map_err(|e| CatalogError::from_store("deleteCharacter", e).extend())?;

        debug!(id, "character deleted");
        Ok(Some(character_from_entry(entry)))
    }
}

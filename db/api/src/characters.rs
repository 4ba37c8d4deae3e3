use async_trait::async_trait;

use crate::errors::Result;

/// Collection name used in errors and logs.
pub const CHARACTER_ENTITY: &str = "Character";

/// A stored character record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterEntry {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub gender: Option<String>,
    pub race: Option<String>,
}

/// Mutable fields of a character, written as a whole on create and on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterFields {
    pub name: String,
    pub description: String,
    pub gender: Option<String>,
    pub race: Option<String>,
}

/// Store primitives for the character collection.
#[async_trait]
pub trait HyruleDbCharacterOperations: Send + Sync {
    /// Returns every character in store order.
    async fn find_all_characters(&self) -> Result<Vec<CharacterEntry>>;

    /// Inserts a new character; the store assigns the id.
    async fn create_character(&self, fields: CharacterFields) -> Result<CharacterEntry>;

    /// Replaces all mutable fields of the character with the given `id`.
    ///
    /// Fails with [`DbError::NotFound`](crate::errors::DbError::NotFound) if no such record exists.
    async fn update_character(&self, id: i32, fields: CharacterFields) -> Result<CharacterEntry>;

    /// Removes the character with the given `id` and returns the removed record.
    ///
    /// Fails with [`DbError::NotFound`](crate::errors::DbError::NotFound) if no such record exists.
    async fn delete_character(&self, id: i32) -> Result<CharacterEntry>;
}

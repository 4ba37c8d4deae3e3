use async_trait::async_trait;

use crate::errors::Result;

pub const PLACE_ENTITY: &str = "Place";

/// A stored place record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceEntry {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceFields {
    pub name: String,
    pub description: String,
}

/// Store primitives for the place collection. Places are create-only.
#[async_trait]
pub trait HyruleDbPlaceOperations: Send + Sync {
    async fn find_all_places(&self) -> Result<Vec<PlaceEntry>>;

    /// Inserts a new place; the store assigns the id.
    async fn create_place(&self, fields: PlaceFields) -> Result<PlaceEntry>;
}

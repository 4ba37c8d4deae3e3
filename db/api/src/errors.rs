use thiserror::Error;

/// Errors reported by a store implementation across the abstract boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DbError {
    /// The keyed record does not exist in the collection.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// The backing engine failed (connectivity, constraint violation, ...).
    #[error("store backend error: {0}")]
    Backend(String),
}

impl DbError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;

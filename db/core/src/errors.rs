use hyrule_db_api::errors::DbError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbSqlError {
    #[error("failed to construct the database: {0}")]
    Construction(String),

    #[error("{entity} with id {id} not found")]
    EntityNotFound { entity: &'static str, id: i32 },

    #[error(transparent)]
    BackendError(#[from] DbErr),
}

impl From<DbSqlError> for DbError {
    fn from(value: DbSqlError) -> Self {
        match value {
            DbSqlError::EntityNotFound { entity, id } => DbError::NotFound { entity, id },
            other => DbError::Backend(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbSqlError>;

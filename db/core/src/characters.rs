use async_trait::async_trait;
use hyrule_db_api::{
    characters::{CHARACTER_ENTITY, CharacterEntry, CharacterFields, HyruleDbCharacterOperations},
    errors::Result,
};
use hyrule_db_entity::{character, conversions::character_active_model, prelude::Character};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Unchanged};

use crate::{DbSqlError, db::HyruleDb};

#[async_trait]
impl HyruleDbCharacterOperations for HyruleDb {
    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn find_all_characters(&self) -> Result<Vec<CharacterEntry>> {
        let models = Character::find()
            .order_by_asc(character::Column::Id)
            .all(&self.db)
            .await
            .map_err(DbSqlError::from)?;

        Ok(models.into_iter().map(CharacterEntry::from).collect())
    }

    #[tracing::instrument(level = "debug", skip(self, fields), err)]
    async fn create_character(&self, fields: CharacterFields) -> Result<CharacterEntry> {
        let _gate = self.write_gate().await;
        let model = character_active_model(fields)
            .insert(&self.db)
            .await
            .map_err(DbSqlError::from)?;

        tracing::debug!(id = model.id, "character inserted");
        Ok(model.into())
    }

    #[tracing::instrument(level = "debug", skip(self, fields), err)]
    async fn update_character(&self, id: i32, fields: CharacterFields) -> Result<CharacterEntry> {
        let mut active = character_active_model(fields);
        active.id = Unchanged(id);

        let _gate = self.write_gate().await;
        let model = active.update(&self.db).await.map_err(|e| match e {
            // Zero rows matched the key, or the row vanished before it could be read back
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => DbSqlError::EntityNotFound {
                entity: CHARACTER_ENTITY,
                id,
            },
            other => DbSqlError::from(other),
        })?;

        Ok(model.into())
    }

    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn delete_character(&self, id: i32) -> Result<CharacterEntry> {
        let not_found = || DbSqlError::EntityNotFound {
            entity: CHARACTER_ENTITY,
            id,
        };

        let _gate = self.write_gate().await;
        let model = Character::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(DbSqlError::from)?
            .ok_or_else(not_found)?;

        let res = Character::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(DbSqlError::from)?;
        if res.rows_affected == 0 {
            return Err(not_found().into());
        }

        Ok(model.into())
    }
}

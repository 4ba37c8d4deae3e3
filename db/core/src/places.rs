use async_trait::async_trait;
use hyrule_db_api::{
    errors::Result,
    places::{HyruleDbPlaceOperations, PlaceEntry, PlaceFields},
};
use hyrule_db_entity::{conversions::place_active_model, place, prelude::Place};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};

use crate::{DbSqlError, db::HyruleDb};

#[async_trait]
impl HyruleDbPlaceOperations for HyruleDb {
    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn find_all_places(&self) -> Result<Vec<PlaceEntry>> {
        let models = Place::find()
            .order_by_asc(place::Column::Id)
            .all(&self.db)
            .await
            .map_err(DbSqlError::from)?;

        Ok(models.into_iter().map(PlaceEntry::from).collect())
    }

    #[tracing::instrument(level = "debug", skip(self, fields), err)]
    async fn create_place(&self, fields: PlaceFields) -> Result<PlaceEntry> {
        let _gate = self.write_gate().await;
        let model = place_active_model(fields)
            .insert(&self.db)
            .await
            .map_err(DbSqlError::from)?;

        tracing::debug!(id = model.id, "place inserted");
        Ok(model.into())
    }
}

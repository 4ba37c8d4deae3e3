use async_trait::async_trait;
use hyrule_db_api::{
    bosses::{BossEntry, HyruleDbBossOperations},
    errors::Result,
};
use hyrule_db_entity::{boss, prelude::Boss};
use sea_orm::{EntityTrait, QueryOrder};

use crate::{DbSqlError, db::HyruleDb};

#[async_trait]
impl HyruleDbBossOperations for HyruleDb {
    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn find_all_bosses(&self) -> Result<Vec<BossEntry>> {
        let models = Boss::find()
            .order_by_asc(boss::Column::Id)
            .all(&self.db)
            .await
            .map_err(DbSqlError::from)?;

        Ok(models.into_iter().map(BossEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ActiveModelTrait, Set};

    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_empty_store_lists_no_bosses() -> anyhow::Result<()> {
        let db = HyruleDb::new_in_memory().await?;

        assert!(db.find_all_bosses().await?.is_empty());

        Ok(())
    }

    #[test_log::test(tokio::test)]
    async fn test_bosses_are_listed_in_insertion_order() -> anyhow::Result<()> {
        let db = HyruleDb::new_in_memory().await?;

        for (name, description) in [("Ganon", "King of Evil"), ("Gohma", "Parasitic armored arachnid")] {
            boss::ActiveModel {
                name: Set(name.to_string()),
                description: Set(description.to_string()),
                ..Default::default()
            }
            .insert(db.conn())
            .await?;
        }

        let names: Vec<_> = db.find_all_bosses().await?.into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Ganon", "Gohma"]);

        Ok(())
    }
}

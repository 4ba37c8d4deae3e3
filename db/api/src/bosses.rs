use async_trait::async_trait;

use crate::errors::Result;

pub const BOSS_ENTITY: &str = "Boss";

/// A stored boss record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossEntry {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Store primitives for the boss collection, which is read-only through the API.
#[async_trait]
pub trait HyruleDbBossOperations: Send + Sync {
    async fn find_all_bosses(&self) -> Result<Vec<BossEntry>>;
}

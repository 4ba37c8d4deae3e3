//! Crate for abstracting the store behavior required by the Hyrule catalog API.
//!
//! The API layer depends only on the traits defined here, so any persistence engine
//! (or an in-memory double in tests) can stand behind it.

pub mod bosses;
pub mod characters;
pub mod errors;
pub mod places;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    bosses::HyruleDbBossOperations, characters::HyruleDbCharacterOperations, errors::Result,
    places::HyruleDbPlaceOperations,
};

/// Operations that concern the store as a whole rather than a single collection.
#[async_trait]
pub trait HyruleDbGeneralOperations: Send + Sync {
    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<()>;
}

/// Convenience trait that contains all Hyrule store operation interfaces.
pub trait HyruleDbAllOperations:
    HyruleDbGeneralOperations + HyruleDbCharacterOperations + HyruleDbPlaceOperations + HyruleDbBossOperations
{
}

/// Store handle shared between the schema and the HTTP layer.
pub type SharedStore = Arc<dyn HyruleDbAllOperations>;

#[doc(hidden)]
pub mod prelude {
    pub use super::*;
    pub use crate::{bosses::*, characters::*, errors::*, places::*};
}

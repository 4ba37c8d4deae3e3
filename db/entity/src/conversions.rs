//! Conversions between SeaORM models and store entries
//!
//! Keeping these next to the models lets the abstract store crate stay free of
//! any ORM dependency.

use hyrule_db_api::prelude::{BossEntry, CharacterEntry, CharacterFields, PlaceEntry, PlaceFields};
use sea_orm::{NotSet, Set};

use crate::{boss, character, place};

impl From<character::Model> for CharacterEntry {
    fn from(model: character::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            gender: model.gender,
            race: model.race,
        }
    }
}

impl From<place::Model> for PlaceEntry {
    fn from(model: place::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<boss::Model> for BossEntry {
    fn from(model: boss::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

/// Builds an active model that writes every mutable character column.
///
/// The primary key is left unset so the same model serves inserts (where the
/// database generates the id) and full updates (where the caller sets it).
pub fn character_active_model(fields: CharacterFields) -> character::ActiveModel {
    character::ActiveModel {
        id: NotSet,
        name: Set(fields.name),
        description: Set(fields.description),
        gender: Set(fields.gender),
        race: Set(fields.race),
    }
}

pub fn place_active_model(fields: PlaceFields) -> place::ActiveModel {
    place::ActiveModel {
        id: NotSet,
        name: Set(fields.name),
        description: Set(fields.description),
    }
}

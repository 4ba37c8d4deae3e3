//! Store entry to GraphQL type conversions
//!
//! This module contains conversion functions between the store-agnostic entries
//! of `hyrule-db-api` and the GraphQL types. These conversions are kept separate from
//! the type definitions to avoid requiring API clients to depend on the store crates.

use hyrule_api_types::{Boss, Character, CharacterCreateInput, Place, PlaceCreateInput};
use hyrule_db_api::{
    bosses::BossEntry,
    characters::{CharacterEntry, CharacterFields},
    places::{PlaceEntry, PlaceFields},
};

pub fn character_from_entry(entry: CharacterEntry) -> Character {
    Character {
        id: entry.id,
        name: entry.name,
        description: entry.description,
        gender: entry.gender,
        race: entry.race,
    }
}

pub fn place_from_entry(entry: PlaceEntry) -> Place {
    Place {
        id: entry.id,
        name: entry.name,
        description: entry.description,
    }
}

pub fn boss_from_entry(entry: BossEntry) -> Boss {
    Boss {
        id: entry.id,
        name: entry.name,
        description: entry.description,
    }
}

/// Convert a validated character input into the full field set of a store write
pub fn character_fields(input: CharacterCreateInput) -> CharacterFields {
    CharacterFields {
        name: input.name,
        description: input.description,
        gender: input.gender,
        race: input.race,
    }
}

pub fn place_fields(input: PlaceCreateInput) -> PlaceFields {
    PlaceFields {
        name: input.name,
        description: input.description,
    }
}

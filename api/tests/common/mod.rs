//! Common test utilities for API integration tests
//!
//! Provides an in-memory store double that counts every store call, so tests can
//! assert that rejected inputs never reach the store, plus helpers to execute
//! GraphQL requests against a schema built around it.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_graphql::{Request, Variables};
use async_trait::async_trait;
use hyrule_api::schema::{CatalogSchema, build_schema};
use hyrule_db_api::prelude::*;
use serde_json::Value;

#[derive(Default)]
struct State {
    last_id: i32,
    characters: Vec<CharacterEntry>,
    places: Vec<PlaceEntry>,
    bosses: Vec<BossEntry>,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

/// Store double keeping every collection in memory
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Store pre-populated with bosses, which the API cannot create
    pub fn with_bosses(bosses: &[(&str, &str)]) -> Arc<Self> {
        let store = Self::default();
        {
            let mut state = store.lock();
            for (name, description) in bosses {
                let id = state.next_id();
                state.bosses.push(BossEntry {
                    id,
                    name: name.to_string(),
                    description: description.to_string(),
                });
            }
        }
        Arc::new(store)
    }

    /// Number of collection operations invoked so far (pings excluded)
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Makes every following operation fail like an unreachable backend
    pub fn fail_backend(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_backend(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::Backend("connection refused by 10.0.0.5:5432".into()));
        }
        Ok(())
    }

    fn enter(&self) -> Result<MutexGuard<'_, State>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.check_backend()?;
        Ok(self.lock())
    }
}

#[async_trait]
impl HyruleDbGeneralOperations for InMemoryStore {
    async fn ping(&self) -> Result<()> {
        self.check_backend()
    }
}

#[async_trait]
impl HyruleDbCharacterOperations for InMemoryStore {
    async fn find_all_characters(&self) -> Result<Vec<CharacterEntry>> {
        Ok(self.enter()?.characters.clone())
    }

    async fn create_character(&self, fields: CharacterFields) -> Result<CharacterEntry> {
        let mut state = self.enter()?;
        let entry = CharacterEntry {
            id: state.next_id(),
            name: fields.name,
            description: fields.description,
            gender: fields.gender,
            race: fields.race,
        };
        state.characters.push(entry.clone());
        Ok(entry)
    }

    async fn update_character(&self, id: i32, fields: CharacterFields) -> Result<CharacterEntry> {
        let mut state = self.enter()?;
        let entry = state
            .characters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DbError::not_found(CHARACTER_ENTITY, id))?;

        entry.name = fields.name;
        entry.description = fields.description;
        entry.gender = fields.gender;
        entry.race = fields.race;
        Ok(entry.clone())
    }

    async fn delete_character(&self, id: i32) -> Result<CharacterEntry> {
        let mut state = self.enter()?;
        let position = state
            .characters
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| DbError::not_found(CHARACTER_ENTITY, id))?;

        Ok(state.characters.remove(position))
    }
}

#[async_trait]
impl HyruleDbPlaceOperations for InMemoryStore {
    async fn find_all_places(&self) -> Result<Vec<PlaceEntry>> {
        Ok(self.enter()?.places.clone())
    }

    async fn create_place(&self, fields: PlaceFields) -> Result<PlaceEntry> {
        let mut state = self.enter()?;
        let entry = PlaceEntry {
            id: state.next_id(),
            name: fields.name,
            description: fields.description,
        };
        state.places.push(entry.clone());
        Ok(entry)
    }
}

#[async_trait]
impl HyruleDbBossOperations for InMemoryStore {
    async fn find_all_bosses(&self) -> Result<Vec<BossEntry>> {
        Ok(self.enter()?.bosses.clone())
    }
}

impl HyruleDbAllOperations for InMemoryStore {}

pub fn schema_with(store: Arc<InMemoryStore>) -> CatalogSchema {
    build_schema(store)
}

/// Executes a GraphQL request and returns the JSON response body
pub async fn execute(schema: &CatalogSchema, query: &str, variables: Value) -> anyhow::Result<Value> {
    let request = Request::new(query).variables(Variables::from_json(variables));
    Ok(serde_json::to_value(schema.execute(request).await)?)
}

/// `extensions.code` of the first error, if any
pub fn first_error_code(response: &Value) -> Option<&str> {
    response["errors"][0]["extensions"]["code"].as_str()
}

pub const CHARACTER_FIELDS: &str = "id name description gender race";

pub fn create_character_mutation() -> String {
    format!("mutation Create($data: CharacterCreateInput!) {{ createCharacter(data: $data) {{ {CHARACTER_FIELDS} }} }}")
}

pub fn update_character_mutation() -> String {
    format!(
        "mutation Update($id: Int!, $data: CharacterCreateInput!) {{ updateCharacter(id: $id, data: $data) {{ \
         {CHARACTER_FIELDS} }} }}"
    )
}

pub fn delete_character_mutation() -> String {
    format!("mutation Delete($id: Int!) {{ deleteCharacter(id: $id) {{ {CHARACTER_FIELDS} }} }}")
}

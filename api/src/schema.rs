//! GraphQL schema builder for the Hyrule catalog API

use async_graphql::{EmptySubscription, Schema};
use hyrule_api_types::DateTime;
use hyrule_db_api::SharedStore;

use crate::{mutation::MutationRoot, query::QueryRoot, validation::ValidationErrorCodes};

/// Schema type served by the API
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the async-graphql schema around a store handle
///
/// The schema is configured with:
/// - The store injected as context data, shared by every request
/// - The `DateTime` scalar registered even though no field uses it yet
/// - Query depth limit (10 levels) to prevent excessive nesting
/// - Query complexity limit (100 points) to prevent expensive operations
/// - Request validation failures tagged with the `VALIDATION_ERROR` code
pub fn build_schema(store: SharedStore) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .register_output_type::<DateTime>()
        .limit_depth(10)
        .limit_complexity(100)
        .extension(ValidationErrorCodes)
        .data(store)
        .finish()
}

/// Export the GraphQL schema to SDL (Schema Definition Language) format
///
/// This generates a string representation of the GraphQL schema that can be used
/// for code generation, documentation, or schema validation tools.
pub fn export_schema_sdl(store: SharedStore) -> String {
    build_schema(store).sdl()
}

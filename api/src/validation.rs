//! Input validation utilities for the GraphQL API
//!
//! Everything here runs before a resolver touches the store.

use std::sync::Arc;

use async_graphql::{
    Response, ServerError, ValidationResult,
    extensions::{Extension, ExtensionContext, ExtensionFactory, NextExecute, NextValidation},
};
use validator::Validate;

use crate::errors::{CatalogError, codes};

/// Id value that stands for "no id given". Store ids are generated from 1.
pub const ABSENT_ID: i32 = 0;

/// Validate an input object against its `validator` rules
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CatalogError> {
    input.validate().map_err(|e| CatalogError::invalid_fields(&e))
}

/// Reject the absent id sentinel
pub fn validate_id(argument: &str, id: i32) -> Result<(), CatalogError> {
    if id == ABSENT_ID {
        return Err(CatalogError::absent_id(argument));
    }
    Ok(())
}

/// Schema extension giving request validation failures the `VALIDATION_ERROR` code
///
/// The engine rejects absent non-null fields and mistyped arguments before any resolver
/// runs, and reports them without a code. This tags those errors so clients see the
/// same code as for rule violations caught by [`validate_input`].
pub struct ValidationErrorCodes;

impl ExtensionFactory for ValidationErrorCodes {
    fn create(&self) -> Arc<dyn Extension> {
        Arc::new(ValidationErrorCodesExtension)
    }
}

struct ValidationErrorCodesExtension;

#[async_trait::async_trait]
impl Extension for ValidationErrorCodesExtension {
    async fn validation(
        &self,
        ctx: &ExtensionContext<'_>,
        next: NextValidation<'_>,
    ) -> Result<ValidationResult, Vec<ServerError>> {
        next.run(ctx)
            .await
            .map_err(|errors| errors.into_iter().map(tag_validation_error).collect())
    }

    async fn execute(
        &self,
        ctx: &ExtensionContext<'_>,
        operation_name: Option<&str>,
        next: NextExecute<'_>,
    ) -> Response {
        let mut response = next.run(ctx, operation_name).await;
        response.errors = response
            .errors
            .into_iter()
            .map(|error| {
                if is_input_coercion_error(&error) {
                    tag_validation_error(error)
                } else {
                    error
                }
            })
            .collect();
        response
    }
}

/// Errors raised while coercing argument values inside a resolver
fn is_input_coercion_error(error: &ServerError) -> bool {
    error.message.starts_with("Failed to parse") || error.message.starts_with("Invalid value for argument")
}

/// Sets `extensions.code` unless the error already carries one
fn tag_validation_error(mut error: ServerError) -> ServerError {
    let extensions = error.extensions.get_or_insert_with(Default::default);
    if extensions.get("code").is_none() {
        extensions.set("code", codes::VALIDATION_ERROR);
    }
    error
}

//! HTTP handlers, one module per resource.

pub mod auth;
pub mod category;
pub mod health;
pub mod product;
pub mod summary;

use catalog_core::error::CoreError;
use catalog_core::validation::validation_message;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Run `validator` rules on a request body, mapping failures to a 400.
pub(crate) fn validate_input<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(validation_message(&e))))
}

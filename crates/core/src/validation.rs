//! Field validation rules for catalog writes.
//!
//! The rule functions here plug into `#[validate(custom(function = ...))]`
//! on the request DTOs, and [`validation_message`] flattens the collected
//! errors into the single human-readable string carried by
//! [`CoreError::Validation`](crate::error::CoreError::Validation).

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

use crate::money::max_price;

// ---------------------------------------------------------------------------
// Rule functions
// ---------------------------------------------------------------------------

/// Reject empty and whitespace-only strings.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// A price must be non-negative and fit NUMERIC(15,2).
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("price_negative").with_message(Cow::Borrowed("must be >= 0")));
    }
    if *price > max_price() {
        return Err(ValidationError::new("price_too_large")
            .with_message(Cow::Owned(format!("must be <= {}", max_price()))));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Error flattening
// ---------------------------------------------------------------------------

/// Flatten `validator` errors into `"field: message; field: message"`.
///
/// Fields are sorted by name so the message is deterministic.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {msg}")
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

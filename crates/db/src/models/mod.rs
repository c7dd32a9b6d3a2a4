//! Entity structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` DTO for writes, where the entity is writable
//!
//! JSON field names are camelCase to match the public API contract.

pub mod category;
pub mod product;
pub mod summary;

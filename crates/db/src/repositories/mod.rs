//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod inventory_repo;
pub mod product_repo;

pub use category_repo::CategoryRepo;
pub use inventory_repo::InventoryRepo;
pub use product_repo::ProductRepo;

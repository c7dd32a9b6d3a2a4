//! Optional category seeding at startup.

use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory};
use crate::repositories::CategoryRepo;

/// Ensure a category exists for each name, matching existing rows
/// case-insensitively.
///
/// Blank names are skipped. Returns the matching category for every
/// non-blank name, whether it was found or inserted.
pub async fn seed_categories(pool: &PgPool, names: &[String]) -> Result<Vec<Category>, sqlx::Error> {
    let mut seeded = Vec::with_capacity(names.len());

    for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        if let Some(existing) = CategoryRepo::find_by_name_ignore_case(pool, name).await? {
            tracing::debug!(category_id = existing.id, name, "Category already present");
            seeded.push(existing);
            continue;
        }

        let created = CategoryRepo::create(
            pool,
            &CreateCategory {
                name: name.to_string(),
            },
        )
        .await?;
        tracing::info!(category_id = created.id, name, "Category seeded");
        seeded.push(created);
    }

    Ok(seeded)
}

//! Category business logic - catalog grouping CRUD.
//!
//! Category names are unique among active rows; listing is ordered by the
//! display `order_number`. Soft-deleting a category does not cascade to its
//! products, so existing references stay resolvable.

use sea_orm::{DatabaseConnection, Set, prelude::*};
use tracing::info;

use crate::entities::{Category, category};
use crate::errors::{Error, Result};
use crate::models::CategoryResponse;
use crate::repo::{self, Page, PageSpec};

/// Creates a new category.
///
/// # Errors
/// Returns `CategoryAlreadyExists` if an active category holds the name,
/// or an error if the database insert fails.
pub async fn create_category(
    db: &DatabaseConnection,
    name: String,
    order_number: i64,
    description: String,
) -> Result<category::Model> {
    if let Some(existing) = repo::find_category_by_name(db, &name).await? {
        return Err(Error::CategoryAlreadyExists {
            name: existing.name,
        });
    }

    let now = chrono::Utc::now();
    let category = category::ActiveModel {
        name: Set(name),
        order_number: Set(order_number),
        description: Set(description),
        created_at: Set(now),
        modified_at: Set(now),
        created_by: Set(None),
        modified_by: Set(None),
        deleted: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(category_id = category.id, name = %category.name, "created category");
    Ok(category)
}

/// Applies the provided fields to an existing active category.
///
/// # Errors
/// Returns `CategoryNotFound` if the category is absent or deleted.
pub async fn update_category(
    db: &DatabaseConnection,
    id: i64,
    name: Option<String>,
    order_number: Option<i64>,
    description: Option<String>,
) -> Result<category::Model> {
    let category = repo::find_active_by_id::<Category, _>(db, id)
        .await?
        .ok_or(Error::CategoryNotFound { id })?;

    let mut category: category::ActiveModel = category.into();
    if let Some(new_name) = name {
        category.name = Set(new_name);
    }
    if let Some(new_order) = order_number {
        category.order_number = Set(new_order);
    }
    if let Some(new_description) = description {
        category.description = Set(new_description);
    }
    category.modified_at = Set(chrono::Utc::now());

    category.update(db).await.map_err(Into::into)
}

/// Soft deletes a category, leaving product references intact.
///
/// # Errors
/// Returns `CategoryNotFound` if the category is absent or already deleted.
pub async fn delete_category(db: &DatabaseConnection, id: i64) -> Result<category::Model> {
    let category = repo::soft_delete::<Category, _>(db, id)
        .await?
        .ok_or(Error::CategoryNotFound { id })?;
    info!(category_id = id, "soft-deleted category");
    Ok(category)
}

/// Returns the public view of one active category.
///
/// # Errors
/// Returns `CategoryNotFound` if the category is absent or deleted.
pub async fn get_category(db: &DatabaseConnection, id: i64) -> Result<CategoryResponse> {
    repo::find_active_by_id::<Category, _>(db, id)
        .await?
        .map(CategoryResponse::from)
        .ok_or(Error::CategoryNotFound { id })
}

/// Returns one page of active categories, ordered by display order.
pub async fn list_categories(
    db: &DatabaseConnection,
    spec: PageSpec,
) -> Result<Page<CategoryResponse>> {
    Ok(
        repo::find_active_page::<Category, _>(db, spec, Some(category::Column::OrderNumber))
            .await?
            .map(CategoryResponse::from),
    )
}

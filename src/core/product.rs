//! Product business logic - catalog item CRUD.
//!
//! A product always references an active category at create time, and
//! repointing the category during an update re-validates the target; a
//! dangling reference can only arise from a category being soft-deleted
//! afterwards, which is allowed and does not break existing reads.

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, Set, prelude::*};
use tracing::info;

use crate::entities::{Category, Product, product};
use crate::errors::{Error, Result};
use crate::models::ProductResponse;
use crate::repo::{self, Page, PageSpec};

fn validate_stock(count: i64) -> Result<()> {
    if count < 0 {
        return Err(Error::InvalidInput {
            field: "count",
            message: format!("stock count cannot be negative, got {count}"),
        });
    }
    Ok(())
}

fn validate_price(amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(Error::InvalidInput {
            field: "amount",
            message: format!("unit price cannot be negative, got {amount}"),
        });
    }
    Ok(())
}

/// Creates a new product in an existing active category.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The stock count or unit price is negative
/// - The category is absent or deleted
/// - The database insert fails
pub async fn create_product(
    db: &DatabaseConnection,
    name: String,
    count: i64,
    amount: Decimal,
    category_id: i64,
) -> Result<product::Model> {
    if name.trim().is_empty() {
        return Err(Error::InvalidInput {
            field: "name",
            message: "product name cannot be empty".to_string(),
        });
    }
    validate_stock(count)?;
    validate_price(amount)?;

    repo::find_active_by_id::<Category, _>(db, category_id)
        .await?
        .ok_or(Error::CategoryNotFound { id: category_id })?;

    let now = chrono::Utc::now();
    let product = product::ActiveModel {
        name: Set(name.trim().to_string()),
        count: Set(count),
        amount: Set(amount),
        category_id: Set(category_id),
        created_at: Set(now),
        modified_at: Set(now),
        created_by: Set(None),
        modified_by: Set(None),
        deleted: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(product_id = product.id, name = %product.name, "created product");
    Ok(product)
}

/// Applies the provided fields to an existing active product.
///
/// A new `category_id` must resolve to an active category; repointing at a
/// missing or deleted one fails with `CategoryNotFound`.
///
/// # Errors
/// Returns an error if the product is absent, a provided field is invalid,
/// the new category does not resolve, or the database update fails.
pub async fn update_product(
    db: &DatabaseConnection,
    id: i64,
    name: Option<String>,
    count: Option<i64>,
    amount: Option<Decimal>,
    category_id: Option<i64>,
) -> Result<product::Model> {
    let product = repo::find_active_by_id::<Product, _>(db, id)
        .await?
        .ok_or(Error::ProductNotFound { id })?;

    if let Some(new_category_id) = category_id {
        repo::find_active_by_id::<Category, _>(db, new_category_id)
            .await?
            .ok_or(Error::CategoryNotFound {
                id: new_category_id,
            })?;
    }

    let mut product: product::ActiveModel = product.into();
    if let Some(new_name) = name {
        if new_name.trim().is_empty() {
            return Err(Error::InvalidInput {
                field: "name",
                message: "product name cannot be empty".to_string(),
            });
        }
        product.name = Set(new_name.trim().to_string());
    }
    if let Some(new_count) = count {
        validate_stock(new_count)?;
        product.count = Set(new_count);
    }
    if let Some(new_amount) = amount {
        validate_price(new_amount)?;
        product.amount = Set(new_amount);
    }
    if let Some(new_category_id) = category_id {
        product.category_id = Set(new_category_id);
    }
    product.modified_at = Set(chrono::Utc::now());

    product.update(db).await.map_err(Into::into)
}

/// Soft deletes a product, preserving purchase history that references it.
///
/// # Errors
/// Returns `ProductNotFound` if the product is absent or already deleted.
pub async fn delete_product(db: &DatabaseConnection, id: i64) -> Result<product::Model> {
    let product = repo::soft_delete::<Product, _>(db, id)
        .await?
        .ok_or(Error::ProductNotFound { id })?;
    info!(product_id = id, "soft-deleted product");
    Ok(product)
}

/// Returns the public view of one active product.
///
/// # Errors
/// Returns `ProductNotFound` if the product is absent or deleted.
pub async fn get_product(db: &DatabaseConnection, id: i64) -> Result<ProductResponse> {
    repo::find_active_by_id::<Product, _>(db, id)
        .await?
        .map(ProductResponse::from)
        .ok_or(Error::ProductNotFound { id })
}

/// Returns one page of active products.
pub async fn list_products(
    db: &DatabaseConnection,
    spec: PageSpec,
) -> Result<Page<ProductResponse>> {
    Ok(repo::find_active_page::<Product, _>(db, spec, None)
        .await?
        .map(ProductResponse::from))
}

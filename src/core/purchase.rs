//! Purchase transaction engine - validates and executes a product purchase as
//! one atomic unit of work.
//!
//! A purchase debits the user's balance and decrements the product's stock,
//! and records one `Transaction` with one `TransactionItem` snapshotting the
//! unit price. Everything happens inside a single database transaction; an
//! uncommitted transaction rolls back on drop, so no failure path can leave a
//! partial debit behind. On top of the engine's isolation, the two decrements
//! are guarded conditional updates (`count = count - n WHERE count >= n`);
//! zero affected rows means a concurrent purchase won the race between our
//! read and our write, and the whole unit of work fails.
//!
//! Purchases are not idempotent: retrying a confirmed purchase double-charges.

use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    DatabaseConnection, QueryFilter, QueryOrder, Set, TransactionTrait, prelude::*,
};
use tracing::{info, warn};

use crate::entities::{
    Product, TransactionItem, User, product, transaction, transaction_item, user,
};
use crate::errors::{Error, Result};
use crate::models::{ProductSummary, PurchaseHistoryEntry};
use crate::repo;

/// Purchases `count` units of one product for one user.
///
/// Preconditions are checked in order, each failing fast with a distinct
/// error: positive quantity, active user, active product, sufficient stock,
/// sufficient balance.
///
/// # Errors
/// Returns `InvalidInput`, `UserNotFound`, `ProductNotFound`,
/// `InsufficientStock` (carrying the available quantity), or
/// `InsufficientBalance` (carrying the shortfall context). Any error after
/// the first write rolls the whole unit of work back.
pub async fn purchase(
    db: &DatabaseConnection,
    user_id: i64,
    product_id: i64,
    count: i64,
) -> Result<()> {
    if count < 1 {
        return Err(Error::InvalidInput {
            field: "count",
            message: format!("purchase quantity must be positive, got {count}"),
        });
    }

    let txn = db.begin().await?;

    let user = repo::find_active_by_id::<User, _>(&txn, user_id)
        .await?
        .ok_or(Error::UserNotFound { id: user_id })?;
    let product = repo::find_active_by_id::<Product, _>(&txn, product_id)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    if product.count < count {
        warn!(
            user_id,
            product_id,
            requested = count,
            available = product.count,
            "purchase rejected: insufficient stock"
        );
        return Err(Error::InsufficientStock {
            requested: count,
            available: product.count,
        });
    }

    let total_amount = product.amount * Decimal::from(count);
    if user.balance < total_amount {
        warn!(
            user_id,
            product_id,
            required = %total_amount,
            available = %user.balance,
            "purchase rejected: insufficient balance"
        );
        return Err(Error::InsufficientBalance {
            required: total_amount,
            available: user.balance,
        });
    }

    let now = chrono::Utc::now();

    // Guarded decrement: loses to a concurrent purchase rather than going
    // negative.
    let stock_update = Product::update_many()
        .col_expr(
            product::Column::Count,
            Expr::col(product::Column::Count).sub(count),
        )
        .col_expr(product::Column::ModifiedAt, Expr::value(now))
        .filter(product::Column::Id.eq(product_id))
        .filter(product::Column::Deleted.eq(false))
        .filter(product::Column::Count.gte(count))
        .exec(&txn)
        .await?;
    if stock_update.rows_affected == 0 {
        return Err(Error::InsufficientStock {
            requested: count,
            available: product.count,
        });
    }

    let balance_update = User::update_many()
        .col_expr(
            user::Column::Balance,
            Expr::col(user::Column::Balance).sub(total_amount),
        )
        .col_expr(user::Column::ModifiedAt, Expr::value(now))
        .filter(user::Column::Id.eq(user_id))
        .filter(user::Column::Deleted.eq(false))
        .filter(user::Column::Balance.gte(total_amount))
        .exec(&txn)
        .await?;
    if balance_update.rows_affected == 0 {
        return Err(Error::InsufficientBalance {
            required: total_amount,
            available: user.balance,
        });
    }

    let purchase_transaction = transaction::ActiveModel {
        total_amount: Set(total_amount),
        user_id: Set(user_id),
        created_at: Set(now),
        modified_at: Set(now),
        created_by: Set(None),
        modified_by: Set(None),
        deleted: Set(false),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    transaction_item::ActiveModel {
        count: Set(count),
        // Unit price snapshot; later catalog price changes do not touch it.
        amount: Set(product.amount),
        total_amount: Set(total_amount),
        product_id: Set(product_id),
        transaction_id: Set(purchase_transaction.id),
        created_at: Set(now),
        modified_at: Set(now),
        created_by: Set(None),
        modified_by: Set(None),
        deleted: Set(false),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(
        user_id,
        product_id,
        count,
        total = %total_amount,
        transaction_id = purchase_transaction.id,
        "purchase completed"
    );
    Ok(())
}

/// Returns the user's purchase history, newest first.
///
/// Each entry pairs the product's current catalog name (soft-deleted
/// products still resolve) with the price snapshotted at purchase time.
///
/// # Errors
/// Returns `PurchaseHistoryNotFound` if the user has no purchase history.
pub async fn get_purchase_history(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<PurchaseHistoryEntry>> {
    let items = TransactionItem::find()
        .filter(transaction_item::Column::Deleted.eq(false))
        .inner_join(transaction::Entity)
        .filter(transaction::Column::UserId.eq(user_id))
        .order_by_desc(transaction_item::Column::CreatedAt)
        .all(db)
        .await?;

    if items.is_empty() {
        return Err(Error::PurchaseHistoryNotFound { user_id });
    }

    let mut history = Vec::with_capacity(items.len());
    for item in items {
        // Unfiltered lookup: a soft-deleted product is still a valid
        // reference from history.
        let product = Product::find_by_id(item.product_id)
            .one(db)
            .await?
            .ok_or(Error::ProductNotFound {
                id: item.product_id,
            })?;
        history.push(PurchaseHistoryEntry {
            product_name: product.name,
            count: item.count,
            amount: item.amount,
            total_amount: item.total_amount,
            purchase_date: item.created_at,
        });
    }
    Ok(history)
}

/// Returns the products referenced by one transaction's line items, with
/// their current stock and price. An empty result is not an error.
pub async fn get_transaction_products(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Vec<ProductSummary>> {
    let products = Product::find()
        .inner_join(transaction_item::Entity)
        .filter(transaction_item::Column::TransactionId.eq(transaction_id))
        .all(db)
        .await?;

    Ok(products.into_iter().map(ProductSummary::from).collect())
}

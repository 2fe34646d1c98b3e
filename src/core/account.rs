//! Account business logic - user lifecycle, balance top-ups, payment history.
//!
//! Usernames are unique among active users only; soft-deleting a user frees
//! the name. A balance top-up writes the credit and its history record in one
//! database transaction so the two can never diverge.

use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    DatabaseConnection, QueryFilter, QueryOrder, Set, TransactionTrait, prelude::*,
};
use tracing::info;

use crate::entities::{User, UserPaymentTransaction, user, user_payment_transaction};
use crate::errors::{Error, Result};
use crate::models::{PaymentHistoryEntry, UserResponse};
use crate::repo::{self, Page, PageSpec};

/// Creates a new user with the given starting balance.
///
/// # Errors
/// Returns an error if:
/// - The full name is empty or whitespace-only
/// - The initial balance is negative
/// - An active user already holds the username
/// - The database insert fails
pub async fn create_user(
    db: &DatabaseConnection,
    full_name: String,
    username: String,
    initial_balance: Decimal,
) -> Result<user::Model> {
    if full_name.trim().is_empty() {
        return Err(Error::InvalidInput {
            field: "full_name",
            message: "full name cannot be empty".to_string(),
        });
    }
    if initial_balance < Decimal::ZERO {
        return Err(Error::InvalidInput {
            field: "balance",
            message: format!("initial balance cannot be negative, got {initial_balance}"),
        });
    }
    if let Some(existing) = repo::find_user_by_username(db, &username).await? {
        return Err(Error::UserAlreadyExists {
            username: existing.username,
        });
    }

    let now = chrono::Utc::now();
    let user = user::ActiveModel {
        full_name: Set(full_name.trim().to_string()),
        username: Set(username),
        balance: Set(initial_balance),
        created_at: Set(now),
        modified_at: Set(now),
        created_by: Set(None),
        modified_by: Set(None),
        deleted: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(user_id = user.id, username = %user.username, "created user");
    Ok(user)
}

/// Applies the provided fields to an existing active user.
///
/// A username change that collides with another active user fails loudly
/// with `UserAlreadyExists` instead of being silently dropped.
///
/// # Errors
/// Returns an error if the user is absent, the new full name is blank, the
/// new username is taken, or the database update fails.
pub async fn update_user(
    db: &DatabaseConnection,
    id: i64,
    full_name: Option<String>,
    username: Option<String>,
) -> Result<user::Model> {
    let user = repo::find_active_by_id::<User, _>(db, id)
        .await?
        .ok_or(Error::UserNotFound { id })?;

    if let Some(new_username) = &username {
        if *new_username != user.username
            && repo::find_user_by_username(db, new_username).await?.is_some()
        {
            return Err(Error::UserAlreadyExists {
                username: new_username.clone(),
            });
        }
    }

    let mut user: user::ActiveModel = user.into();
    if let Some(new_full_name) = full_name {
        if new_full_name.trim().is_empty() {
            return Err(Error::InvalidInput {
                field: "full_name",
                message: "full name cannot be empty".to_string(),
            });
        }
        user.full_name = Set(new_full_name.trim().to_string());
    }
    if let Some(new_username) = username {
        user.username = Set(new_username);
    }
    user.modified_at = Set(chrono::Utc::now());

    user.update(db).await.map_err(Into::into)
}

/// Soft deletes a user, preserving their transaction history.
///
/// # Errors
/// Returns `UserNotFound` if the user is absent or already deleted.
pub async fn delete_user(db: &DatabaseConnection, id: i64) -> Result<user::Model> {
    let user = repo::soft_delete::<User, _>(db, id)
        .await?
        .ok_or(Error::UserNotFound { id })?;
    info!(user_id = id, "soft-deleted user");
    Ok(user)
}

/// Returns the public view of one active user.
///
/// # Errors
/// Returns `UserNotFound` if the user is absent or deleted.
pub async fn get_user(db: &DatabaseConnection, id: i64) -> Result<UserResponse> {
    repo::find_active_by_id::<User, _>(db, id)
        .await?
        .map(UserResponse::from)
        .ok_or(Error::UserNotFound { id })
}

/// Returns one page of active users.
pub async fn list_users(db: &DatabaseConnection, spec: PageSpec) -> Result<Page<UserResponse>> {
    Ok(repo::find_active_page::<User, _>(db, spec, None)
        .await?
        .map(UserResponse::from))
}

/// Credits the user's balance and records the top-up, atomically.
///
/// Positivity of `amount` is the request boundary's concern; this operation
/// only guarantees that the credit and its history record land together.
///
/// # Errors
/// Returns `UserNotFound` if the user is absent or deleted.
pub async fn add_balance(
    db: &DatabaseConnection,
    id: i64,
    amount: Decimal,
) -> Result<user::Model> {
    let txn = db.begin().await?;

    repo::find_active_by_id::<User, _>(&txn, id)
        .await?
        .ok_or(Error::UserNotFound { id })?;

    let now = chrono::Utc::now();
    User::update_many()
        .col_expr(
            user::Column::Balance,
            Expr::col(user::Column::Balance).add(amount),
        )
        .col_expr(user::Column::ModifiedAt, Expr::value(now))
        .filter(user::Column::Id.eq(id))
        .exec(&txn)
        .await?;

    user_payment_transaction::ActiveModel {
        amount: Set(amount),
        user_id: Set(id),
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
    info!(user_id = id, %amount, "credited balance");

    User::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::UserNotFound { id })
}

/// Returns every non-deleted top-up record for the user, newest first.
/// An empty history is a valid result, not an error.
pub async fn get_payment_history(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<PaymentHistoryEntry>> {
    let payments = UserPaymentTransaction::find()
        .filter(user_payment_transaction::Column::UserId.eq(user_id))
        .filter(user_payment_transaction::Column::Deleted.eq(false))
        .order_by_desc(user_payment_transaction::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(payments.into_iter().map(PaymentHistoryEntry::from).collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn create_user_rejects_blank_name_and_negative_balance() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_user(
            &db,
            "   ".to_string(),
            "ann001".to_string(),
            Decimal::ZERO,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidInput {
                field: "full_name",
                ..
            }
        ));

        let result = create_user(
            &db,
            "Ann".to_string(),
            "ann001".to_string(),
            Decimal::new(-1, 0),
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidInput { field: "balance", .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn create_user_rejects_duplicate_username() -> Result<()> {
        let db = setup_test_db().await?;
        create_custom_user(&db, "Ann", "ann001", Decimal::new(10_000, 2)).await?;

        let result = create_user(&db, "Other Ann".to_string(), "ann001".to_string(), Decimal::ZERO).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::UserAlreadyExists { username } if username == "ann001"
        ));

        Ok(())
    }

    #[tokio::test]
    async fn deleted_user_frees_their_username() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "ann001").await?;
        delete_user(&db, user.id).await?;

        let replacement = create_user(
            &db,
            "New Ann".to_string(),
            "ann001".to_string(),
            Decimal::ZERO,
        )
        .await?;
        assert_ne!(replacement.id, user.id);

        Ok(())
    }

    #[tokio::test]
    async fn update_applies_only_provided_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_custom_user(&db, "Ann", "ann001", Decimal::new(10_000, 2)).await?;

        let updated = update_user(&db, user.id, Some("Ann Smith".to_string()), None).await?;
        assert_eq!(updated.full_name, "Ann Smith");
        assert_eq!(updated.username, "ann001");
        assert_eq!(updated.balance, Decimal::new(10_000, 2));

        let updated = update_user(&db, user.id, None, Some("ann002".to_string())).await?;
        assert_eq!(updated.full_name, "Ann Smith");
        assert_eq!(updated.username, "ann002");

        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_username_taken_by_another_active_user() -> Result<()> {
        let db = setup_test_db().await?;
        let ann = create_test_user(&db, "ann001").await?;
        create_test_user(&db, "bob001").await?;

        let result = update_user(&db, ann.id, None, Some("bob001".to_string())).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::UserAlreadyExists { username } if username == "bob001"
        ));

        // Keeping one's own username is not a conflict.
        let kept = update_user(&db, ann.id, None, Some("ann001".to_string())).await?;
        assert_eq!(kept.username, "ann001");

        Ok(())
    }

    #[tokio::test]
    async fn update_missing_user_fails() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        let result = update_user(&db, 999, Some("Ann".to_string()), None).await;
        assert!(matches!(result.unwrap_err(), Error::UserNotFound { id: 999 }));

        Ok(())
    }

    #[tokio::test]
    async fn get_user_is_idempotent_between_writes() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let first = get_user(&db, user.id).await?;
        let second = get_user(&db, user.id).await?;
        assert_eq!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn get_deleted_user_fails() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        delete_user(&db, user.id).await?;

        let result = get_user(&db, user.id).await;
        assert!(matches!(result.unwrap_err(), Error::UserNotFound { .. }));

        let result = delete_user(&db, user.id).await;
        assert!(matches!(result.unwrap_err(), Error::UserNotFound { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn list_users_excludes_deleted() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "ann001").await?;
        let bob = create_test_user(&db, "bob001").await?;
        delete_user(&db, bob.id).await?;

        let page = list_users(&db, PageSpec::new(1, 10)).await?;
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].username, "ann001");

        Ok(())
    }

    #[tokio::test]
    async fn add_balance_credits_and_records_history() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_custom_user(&db, "Ann", "ann001", Decimal::new(2_500, 2)).await?;

        let credited = add_balance(&db, user.id, Decimal::new(7_500, 2)).await?;
        assert_eq!(credited.balance, Decimal::new(10_000, 2));

        let history = get_payment_history(&db, user.id).await?;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].amount, Decimal::new(7_500, 2));

        Ok(())
    }

    #[tokio::test]
    async fn add_balance_missing_user_fails() -> Result<()> {
        let db = setup_test_db().await?;

        let result = add_balance(&db, 999, Decimal::ONE).await;
        assert!(matches!(result.unwrap_err(), Error::UserNotFound { id: 999 }));

        Ok(())
    }

    #[tokio::test]
    async fn payment_history_is_empty_not_an_error() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let history = get_payment_history(&db, user.id).await?;
        assert!(history.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn payment_history_is_newest_first() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        add_balance(&db, user.id, Decimal::new(100, 2)).await?;
        add_balance(&db, user.id, Decimal::new(200, 2)).await?;
        add_balance(&db, user.id, Decimal::new(300, 2)).await?;

        let history = get_payment_history(&db, user.id).await?;
        assert_eq!(history.len(), 3);
        assert!(history[0].transaction_date >= history[2].transaction_date);

        Ok(())
    }
}

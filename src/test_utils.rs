//! Shared test utilities for the back office core.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults. The fixture values match
//! the worked scenario used throughout the purchase tests: Ann with 100.00,
//! a "Drinks" category, and a Cola priced 2.50 with 10 in stock.

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::core::{account, category, product};
use crate::entities;
use crate::errors::Result;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test user with a balance of 100.00.
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entities::user::Model> {
    account::create_user(
        db,
        "Test User".to_string(),
        username.to_string(),
        Decimal::new(10_000, 2),
    )
    .await
}

/// Creates a test user with custom name and balance.
pub async fn create_custom_user(
    db: &DatabaseConnection,
    full_name: &str,
    username: &str,
    balance: Decimal,
) -> Result<entities::user::Model> {
    account::create_user(db, full_name.to_string(), username.to_string(), balance).await
}

/// Creates the default "Drinks" test category.
pub async fn create_test_category(db: &DatabaseConnection) -> Result<entities::category::Model> {
    category::create_category(db, "Drinks".to_string(), 1, "desc".to_string()).await
}

/// Creates a test category with custom name and display order.
pub async fn create_custom_category(
    db: &DatabaseConnection,
    name: &str,
    order_number: i64,
) -> Result<entities::category::Model> {
    category::create_category(db, name.to_string(), order_number, "desc".to_string()).await
}

/// Creates a test product with custom stock and price.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    count: i64,
    amount: Decimal,
    category_id: i64,
) -> Result<entities::product::Model> {
    product::create_product(db, name.to_string(), count, amount, category_id).await
}

/// Sets up a complete test environment with one user.
/// Returns (db, user) for account-centric tests.
pub async fn setup_with_user() -> Result<(DatabaseConnection, entities::user::Model)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "ann001").await?;
    Ok((db, user))
}

/// Sets up a complete test environment with a category and a product.
/// Returns (db, category, product) for catalog tests.
pub async fn setup_with_catalog() -> Result<(
    DatabaseConnection,
    entities::category::Model,
    entities::product::Model,
)> {
    let db = setup_test_db().await?;
    let category = create_test_category(&db).await?;
    let product = create_custom_product(&db, "Cola", 10, Decimal::new(250, 2), category.id).await?;
    Ok((db, category, product))
}

/// Sets up the full worked scenario: Ann with 100.00 and a stocked Cola.
/// Returns (db, user, category, product) for purchase tests.
pub async fn setup_with_shop() -> Result<(
    DatabaseConnection,
    entities::user::Model,
    entities::category::Model,
    entities::product::Model,
)> {
    let db = setup_test_db().await?;
    let user = create_custom_user(&db, "Ann", "ann001", Decimal::new(10_000, 2)).await?;
    let category = create_test_category(&db).await?;
    let product = create_custom_product(&db, "Cola", 10, Decimal::new(250, 2), category.id).await?;
    Ok((db, user, category, product))
}

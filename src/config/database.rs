//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Table
//! creation uses `Schema::create_table_from_entity` to generate SQL straight
//! from the entity definitions, so the database schema always matches the
//! Rust structs without hand-written migrations.

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entities::{
    Category, Product, Transaction, TransactionItem, User, UserPaymentTransaction,
};
use crate::errors::Result;

/// Gets the database URL from the `DATABASE_URL` environment variable, or
/// falls back to a default local `SQLite` file.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/tuckshop.sqlite".to_string())
}

/// Establishes a connection to the database named by [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let user_table = schema.create_table_from_entity(User);
    let category_table = schema.create_table_from_entity(Category);
    let product_table = schema.create_table_from_entity(Product);
    let transaction_table = schema.create_table_from_entity(Transaction);
    let transaction_item_table = schema.create_table_from_entity(TransactionItem);
    let payment_table = schema.create_table_from_entity(UserPaymentTransaction);

    db.execute(builder.build(&user_table)).await?;
    db.execute(builder.build(&category_table)).await?;
    db.execute(builder.build(&product_table)).await?;
    db.execute(builder.build(&transaction_table)).await?;
    db.execute(builder.build(&transaction_item_table)).await?;
    db.execute(builder.build(&payment_table)).await?;

    Ok(())
}

//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each table carries the same audit columns (`id`, `created_at`, `modified_at`,
//! `created_by`, `modified_by`, `deleted`); the shared contract over those
//! columns lives in [`crate::repo::AuditedEntity`] rather than a base type.

pub mod category;
pub mod product;
pub mod transaction;
pub mod transaction_item;
pub mod user;
pub mod user_payment_transaction;

// Re-export specific types to avoid conflicts
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};
pub use transaction_item::{
    Column as TransactionItemColumn, Entity as TransactionItem, Model as TransactionItemModel,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
pub use user_payment_transaction::{
    Column as UserPaymentTransactionColumn, Entity as UserPaymentTransaction,
    Model as UserPaymentTransactionModel,
};

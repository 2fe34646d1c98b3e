//! User entity - An account holder with a spendable cash balance.
//!
//! Usernames are unique among non-deleted users; uniqueness is enforced by the
//! account service at create/rename time, not by a database constraint, so that
//! a soft-deleted user frees their username.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full display name, never empty
    pub full_name: String,
    /// Login name, unique among active users
    pub username: String,
    /// Spendable balance; only the purchase engine and balance top-up mutate it
    pub balance: Decimal,
    /// When the row was created
    pub created_at: DateTimeUtc,
    /// When the row was last modified
    pub modified_at: DateTimeUtc,
    /// Actor that created the row, if known
    pub created_by: Option<i64>,
    /// Actor that last modified the row, if known
    pub modified_by: Option<i64>,
    /// Soft delete flag - if true, the user is hidden but data is preserved
    pub deleted: bool,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A user has many purchase transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transaction,
    /// A user has many balance top-up records
    #[sea_orm(has_many = "super::user_payment_transaction::Entity")]
    UserPaymentTransaction,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

impl Related<super::user_payment_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPaymentTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

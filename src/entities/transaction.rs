//! Transaction entity - One completed purchase event.
//!
//! Created only by the purchase engine, together with its line items, inside a
//! single database transaction. Rows are never updated or deleted afterwards.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Purchase transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Sum of the line-item totals
    pub total_amount: Decimal,
    /// User whose balance was debited
    pub user_id: i64,
    /// When the purchase happened
    pub created_at: DateTimeUtc,
    /// When the row was last modified
    pub modified_at: DateTimeUtc,
    /// Actor that created the row, if known
    pub created_by: Option<i64>,
    /// Actor that last modified the row, if known
    pub modified_by: Option<i64>,
    /// Soft delete flag, unused by the purchase engine but kept for the shared audit shape
    pub deleted: bool,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// A transaction owns one or more line items
    #[sea_orm(has_many = "super::transaction_item::Entity")]
    TransactionItem,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::transaction_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! TransactionItem entity - One product line inside a purchase transaction.
//!
//! `amount` is the unit price snapshotted at purchase time and `total_amount`
//! is `count * amount`; neither follows later catalog price changes.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction line-item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transaction_items")]
pub struct Model {
    /// Unique identifier for the line item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Units purchased, at least 1
    pub count: i64,
    /// Unit price snapshot at purchase time
    pub amount: Decimal,
    /// Line total, `count * amount`
    pub total_amount: Decimal,
    /// Product that was purchased
    pub product_id: i64,
    /// Parent transaction
    pub transaction_id: i64,
    /// When the row was created
    pub created_at: DateTimeUtc,
    /// When the row was last modified
    pub modified_at: DateTimeUtc,
    /// Actor that created the row, if known
    pub created_by: Option<i64>,
    /// Actor that last modified the row, if known
    pub modified_by: Option<i64>,
    /// Soft delete flag - excluded line items drop out of purchase history
    pub deleted: bool,
}

/// Defines relationships between TransactionItem and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line item references one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
    /// Each line item belongs to one transaction
    #[sea_orm(
        belongs_to = "super::transaction::Entity",
        from = "Column::TransactionId",
        to = "super::transaction::Column::Id"
    )]
    Transaction,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Product entity - A catalog item with a stock count and unit price.
//!
//! `count` is mutated in exactly two places: catalog updates and the purchase
//! engine's guarded decrement. `amount` is the current unit price; purchases
//! snapshot it into the transaction item so later price changes do not rewrite
//! history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Product name (e.g. "Cola")
    pub name: String,
    /// Units in stock, never negative
    pub count: i64,
    /// Current unit price
    pub amount: Decimal,
    /// Category this product belongs to
    pub category_id: i64,
    /// When the row was created
    pub created_at: DateTimeUtc,
    /// When the row was last modified
    pub modified_at: DateTimeUtc,
    /// Actor that created the row, if known
    pub created_by: Option<i64>,
    /// Actor that last modified the row, if known
    pub modified_by: Option<i64>,
    /// Soft delete flag - if true, the product is hidden but data is preserved
    pub deleted: bool,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    /// A product appears in many transaction items
    #[sea_orm(has_many = "super::transaction_item::Entity")]
    TransactionItem,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::transaction_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

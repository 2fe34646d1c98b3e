//! Category entity - A product grouping with a display order.
//!
//! Category names are unique among non-deleted rows. Products reference a
//! category but never own it; soft-deleting a category leaves existing
//! product references resolvable.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Category name, unique among active categories
    pub name: String,
    /// Position used when listing categories for display
    pub order_number: i64,
    /// Free-form description
    pub description: String,
    /// When the row was created
    pub created_at: DateTimeUtc,
    /// When the row was last modified
    pub modified_at: DateTimeUtc,
    /// Actor that created the row, if known
    pub created_by: Option<i64>,
    /// Actor that last modified the row, if known
    pub modified_by: Option<i64>,
    /// Soft delete flag - if true, the category is hidden but data is preserved
    pub deleted: bool,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A category groups many products
    #[sea_orm(has_many = "super::product::Entity")]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

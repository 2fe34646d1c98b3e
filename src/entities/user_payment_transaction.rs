//! UserPaymentTransaction entity - One balance top-up event for a user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Balance top-up database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_payment_transactions")]
pub struct Model {
    /// Unique identifier for the top-up record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Amount credited to the user's balance
    pub amount: Decimal,
    /// User whose balance was credited
    pub user_id: i64,
    /// When the top-up happened
    pub created_at: DateTimeUtc,
    /// When the row was last modified
    pub modified_at: DateTimeUtc,
    /// Actor that created the row, if known
    pub created_by: Option<i64>,
    /// Actor that last modified the row, if known
    pub modified_by: Option<i64>,
    /// Soft delete flag - excluded records drop out of payment history
    pub deleted: bool,
}

/// Defines relationships between UserPaymentTransaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each top-up belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

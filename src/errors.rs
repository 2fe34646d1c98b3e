//! Unified error types for the back office core.
//!
//! Business-rule failures are typed variants carrying structured context
//! (ids, available stock, balance shortfall) so the request boundary can
//! format or localize them however it likes; `Display` only provides the
//! default English message. Each kind has a stable numeric code, exposed to
//! clients through [`crate::models::ErrorBody`].

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("user {id} not found")]
    UserNotFound { id: i64 },

    #[error("user with username {username:?} already exists")]
    UserAlreadyExists { username: String },

    #[error("product {id} not found")]
    ProductNotFound { id: i64 },

    #[error("category {id} not found")]
    CategoryNotFound { id: i64 },

    #[error("category with name {name:?} already exists")]
    CategoryAlreadyExists { name: String },

    #[error("no purchase history found for user {user_id}")]
    PurchaseHistoryNotFound { user_id: i64 },

    #[error("insufficient balance: {required} required, {available} available")]
    InsufficientBalance {
        required: Decimal,
        available: Decimal,
    },

    #[error("insufficient stock: {requested} requested, {available} available")]
    InsufficientStock { requested: i64, available: i64 },

    #[error("invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl Error {
    /// Stable numeric identifier per error kind, part of the client contract.
    pub const fn code(&self) -> u16 {
        match self {
            Self::UserNotFound { .. } => 100,
            Self::UserAlreadyExists { .. } => 101,
            Self::ProductNotFound { .. } => 200,
            Self::CategoryNotFound { .. } => 300,
            Self::CategoryAlreadyExists { .. } => 301,
            Self::PurchaseHistoryNotFound { .. } => 400,
            Self::InsufficientBalance { .. } => 401,
            Self::InsufficientStock { .. } => 402,
            Self::InvalidInput { .. } => 422,
            Self::Database(_) => 500,
        }
    }

    /// Whether the failure is a business-rule rejection the caller can act on,
    /// as opposed to an unanticipated storage failure.
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Database(_))
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

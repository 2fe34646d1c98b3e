//! Response shapes handed to the request boundary.
//!
//! These are plain serializable projections of entity state; nothing here
//! touches the database. The boundary turns [`crate::errors::Error`] values
//! into [`ErrorBody`] for the client-facing `{code, message}` contract.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::entities;
use crate::errors::Error;

/// Public view of a user account
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub full_name: String,
    pub username: String,
    pub balance: Decimal,
}

impl From<entities::UserModel> for UserResponse {
    fn from(user: entities::UserModel) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            username: user.username,
            balance: user.balance,
        }
    }
}

/// Public view of a category
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub order: i64,
    pub description: String,
}

impl From<entities::CategoryModel> for CategoryResponse {
    fn from(category: entities::CategoryModel) -> Self {
        Self {
            id: category.id,
            name: category.name,
            order: category.order_number,
            description: category.description,
        }
    }
}

/// Public view of a product
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub count: i64,
    pub category_id: i64,
}

impl From<entities::ProductModel> for ProductResponse {
    fn from(product: entities::ProductModel) -> Self {
        Self {
            id: product.id,
            name: product.name,
            count: product.count,
            category_id: product.category_id,
        }
    }
}

/// One balance top-up in a user's payment history
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaymentHistoryEntry {
    pub id: i64,
    pub amount: Decimal,
    pub transaction_date: DateTime<Utc>,
}

impl From<entities::UserPaymentTransactionModel> for PaymentHistoryEntry {
    fn from(payment: entities::UserPaymentTransactionModel) -> Self {
        Self {
            id: payment.id,
            amount: payment.amount,
            transaction_date: payment.created_at,
        }
    }
}

/// One line of a user's purchase history.
///
/// `product_name` is the product's current catalog name; `amount` and
/// `total_amount` are the prices snapshotted when the purchase happened.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PurchaseHistoryEntry {
    pub product_name: String,
    pub count: i64,
    pub amount: Decimal,
    pub total_amount: Decimal,
    pub purchase_date: DateTime<Utc>,
}

/// Product state as referenced by one transaction's line items
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub count: i64,
    pub amount: Decimal,
}

impl From<entities::ProductModel> for ProductSummary {
    fn from(product: entities::ProductModel) -> Self {
        Self {
            id: product.id,
            name: product.name,
            count: product.count,
            amount: product.amount,
        }
    }
}

/// Client-facing error body: stable code plus a human-readable message
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

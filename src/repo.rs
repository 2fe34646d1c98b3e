//! Repository layer - generic active-only data access over audited entities.
//!
//! Every table shares the same audit columns, so the soft-delete filter is one
//! explicit predicate applied here at the data-access boundary instead of being
//! baked into each query by hand. An entity opts in by implementing
//! [`AuditedEntity`], which names its id, deleted, and modified-at columns;
//! the free functions then provide active-only lookup, pagination, and soft
//! delete for it. Entity-specific uniqueness lookups live at the bottom.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::entities::{
    category, product, transaction, transaction_item, user, user_payment_transaction,
};
use crate::errors::{Error, Result};

/// Contract shared by every audited table: where to find the columns the
/// generic repository functions filter and update.
pub trait AuditedEntity: EntityTrait {
    /// Primary-key column
    fn id_column() -> Self::Column;
    /// Soft-delete flag column
    fn deleted_column() -> Self::Column;
    /// Last-modified timestamp column
    fn modified_at_column() -> Self::Column;
}

macro_rules! impl_audited_entity {
    ($module:ident) => {
        impl AuditedEntity for $module::Entity {
            fn id_column() -> Self::Column {
                $module::Column::Id
            }
            fn deleted_column() -> Self::Column {
                $module::Column::Deleted
            }
            fn modified_at_column() -> Self::Column {
                $module::Column::ModifiedAt
            }
        }
    };
}

impl_audited_entity!(user);
impl_audited_entity!(category);
impl_audited_entity!(product);
impl_audited_entity!(transaction);
impl_audited_entity!(transaction_item);
impl_audited_entity!(user_payment_transaction);

/// 1-based page request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSpec {
    /// Page number, starting at 1
    pub page: u64,
    /// Rows per page, at least 1
    pub size: u64,
}

impl PageSpec {
    pub const fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }
}

/// One page of results plus the metadata clients need for pagination
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Projects the page's rows while keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Returns the entity only if it exists and is not soft-deleted.
pub async fn find_active_by_id<E, C>(db: &C, id: i64) -> Result<Option<E::Model>>
where
    E: AuditedEntity,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::id_column().eq(id))
        .filter(E::deleted_column().eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns one page of non-deleted rows, optionally ordered ascending by
/// `order_by`, together with the total active row count.
pub async fn find_active_page<E, C>(
    db: &C,
    spec: PageSpec,
    order_by: Option<E::Column>,
) -> Result<Page<E::Model>>
where
    E: AuditedEntity,
    E::Model: FromQueryResult + Send + Sync,
    C: ConnectionTrait,
{
    if spec.page == 0 {
        return Err(Error::InvalidInput {
            field: "page",
            message: "page numbers start at 1".to_string(),
        });
    }
    if spec.size == 0 {
        return Err(Error::InvalidInput {
            field: "size",
            message: "page size must be at least 1".to_string(),
        });
    }

    let mut query = E::find().filter(E::deleted_column().eq(false));
    if let Some(column) = order_by {
        query = query.order_by_asc(column);
    }

    let paginator = query.paginate(db, spec.size);
    let totals = paginator.num_items_and_pages().await?;
    let items = paginator.fetch_page(spec.page - 1).await?;

    Ok(Page {
        items,
        page: spec.page,
        size: spec.size,
        total_items: totals.number_of_items,
        total_pages: totals.number_of_pages,
    })
}

/// Marks the row deleted and returns the updated model, or `None` if the row
/// is absent or already soft-deleted. The guarded filter makes a repeated
/// delete a no-op rather than a rewrite of `modified_at`.
pub async fn soft_delete<E, C>(db: &C, id: i64) -> Result<Option<E::Model>>
where
    E: AuditedEntity,
    C: ConnectionTrait,
{
    let result = E::update_many()
        .col_expr(E::deleted_column(), Expr::value(true))
        .col_expr(E::modified_at_column(), Expr::value(chrono::Utc::now()))
        .filter(E::id_column().eq(id))
        .filter(E::deleted_column().eq(false))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Ok(None);
    }

    E::find()
        .filter(E::id_column().eq(id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Active-user lookup by username, used for create/rename conflict checks.
pub async fn find_user_by_username<C>(db: &C, username: &str) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .filter(user::Column::Deleted.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Active-category lookup by name, used for create conflict checks.
pub async fn find_category_by_name<C>(db: &C, name: &str) -> Result<Option<category::Model>>
where
    C: ConnectionTrait,
{
    category::Entity::find()
        .filter(category::Column::Name.eq(name))
        .filter(category::Column::Deleted.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

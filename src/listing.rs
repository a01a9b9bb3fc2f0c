//! Shared owner-scoped list queries.
//!
//! Every entity list is the same query shape: `WHERE user_id = $owner` plus
//! zero or more ANDed filters, a count over that predicate, and an ordered
//! LIMIT/OFFSET page over the same predicate. The count and item queries are
//! built from one `push_filters` call each, so a filter change always moves
//! `total` and `items` together.

use serde::Serialize;
use sqlx::{postgres::PgRow, FromRow, PgPool, Postgres, QueryBuilder};
use time::Date;
use uuid::Uuid;

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub page: i64,
    pub size: i64,
}

impl Page {
    /// 1-indexed page with a bounded size; out-of-range values are clamped.
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            size: size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.size
    }
}

#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
}

/// One filter predicate. All variants are ANDed onto the owner constraint.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Exact match on a column.
    Eq(&'static str, String),
    /// Case-insensitive substring match.
    Contains(&'static str, String),
    /// Membership in a jsonb string array, matched against its serialized
    /// text form. Case-insensitive, whole-tag (the quotes are part of the
    /// pattern).
    HasTag(&'static str, String),
    /// Column >= date.
    From(&'static str, Date),
    /// Column <= date.
    To(&'static str, Date),
}

pub(crate) fn contains_pattern(needle: &str) -> String {
    format!("%{needle}%")
}

pub(crate) fn tag_pattern(tag: &str) -> String {
    format!("%\"{tag}\"%")
}

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, owner: Uuid, filters: &[Filter]) {
    qb.push(" WHERE user_id = ").push_bind(owner);
    for filter in filters {
        match filter {
            Filter::Eq(col, value) => {
                qb.push(" AND ").push(*col).push(" = ").push_bind(value.clone());
            }
            Filter::Contains(col, needle) => {
                qb.push(" AND ")
                    .push(*col)
                    .push(" ILIKE ")
                    .push_bind(contains_pattern(needle));
            }
            Filter::HasTag(col, tag) => {
                qb.push(" AND ")
                    .push(*col)
                    .push("::text ILIKE ")
                    .push_bind(tag_pattern(tag));
            }
            Filter::From(col, date) => {
                qb.push(" AND ").push(*col).push(" >= ").push_bind(*date);
            }
            Filter::To(col, date) => {
                qb.push(" AND ").push(*col).push(" <= ").push_bind(*date);
            }
        }
    }
}

/// Count and fetch one page of `table`, scoped to `owner`, with both queries
/// sharing the same WHERE clause.
pub async fn paginate<T>(
    db: &PgPool,
    table: &str,
    columns: &str,
    owner: Uuid,
    filters: &[Filter],
    order_by: &str,
    page: Page,
) -> anyhow::Result<(Vec<T>, i64)>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut count = QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) FROM {table}"));
    push_filters(&mut count, owner, filters);
    let total: i64 = count.build_query_scalar().fetch_one(db).await?;

    let mut items = QueryBuilder::<Postgres>::new(format!("SELECT {columns} FROM {table}"));
    push_filters(&mut items, owner, filters);
    items
        .push(" ORDER BY ")
        .push(order_by)
        .push(" LIMIT ")
        .push_bind(page.size)
        .push(" OFFSET ")
        .push_bind(page.offset());
    let rows = items.build_query_as::<T>().fetch_all(db).await?;

    Ok((rows, total))
}

pub async fn count_owned(db: &PgPool, table: &str, owner: Uuid) -> anyhow::Result<i64> {
    let mut count = QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) FROM {table}"));
    push_filters(&mut count, owner, &[]);
    Ok(count.build_query_scalar().fetch_one(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn page_defaults() {
        let page = Page::new(None, None);
        assert_eq!(page.page, 1);
        assert_eq!(page.size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn page_clamps_out_of_range_values() {
        let page = Page::new(Some(0), Some(1000));
        assert_eq!(page.page, 1);
        assert_eq!(page.size, MAX_PAGE_SIZE);

        let page = Page::new(Some(-3), Some(0));
        assert_eq!(page.page, 1);
        assert_eq!(page.size, 1);
    }

    #[test]
    fn offset_is_one_indexed() {
        let page = Page::new(Some(3), Some(10));
        assert_eq!(page.offset(), 20);
    }

    #[test]
    fn owner_constraint_is_always_present() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM problems");
        push_filters(&mut qb, Uuid::new_v4(), &[]);
        assert_eq!(qb.sql(), "SELECT COUNT(*) FROM problems WHERE user_id = $1");
    }

    #[test]
    fn filters_are_anded_in_order() {
        let filters = vec![
            Filter::Eq("difficulty", "Easy".into()),
            Filter::Contains("title", "cache".into()),
            Filter::HasTag("tags", "rust".into()),
            Filter::From("asked_date", date!(2024 - 01 - 01)),
            Filter::To("asked_date", date!(2024 - 12 - 31)),
        ];
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM t");
        push_filters(&mut qb, Uuid::new_v4(), &filters);
        assert_eq!(
            qb.sql(),
            "SELECT * FROM t WHERE user_id = $1 AND difficulty = $2 \
             AND title ILIKE $3 AND tags::text ILIKE $4 \
             AND asked_date >= $5 AND asked_date <= $6"
        );
    }

    #[test]
    fn count_and_items_share_the_same_predicate() {
        let owner = Uuid::new_v4();
        let filters = vec![
            Filter::Eq("difficulty", "Hard".into()),
            Filter::HasTag("tags", "sql".into()),
        ];

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM problems");
        push_filters(&mut count, owner, &filters);
        let mut items = QueryBuilder::<Postgres>::new("SELECT id FROM problems");
        push_filters(&mut items, owner, &filters);

        let count_where = count.sql().split_once(" WHERE ").map(|(_, w)| w.to_string());
        let items_where = items.sql().split_once(" WHERE ").map(|(_, w)| w.to_string());
        assert_eq!(count_where, items_where);
    }

    #[test]
    fn tag_pattern_quotes_the_tag() {
        // Matching the serialized jsonb array: a whole tag, not a substring
        // of some longer tag.
        assert_eq!(tag_pattern("rust"), "%\"rust\"%");
        assert_eq!(contains_pattern("cache"), "%cache%");
    }
}

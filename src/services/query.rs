// src/services/query.rs
use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

/// Query string accepted by every list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Recent,
    Oldest,
}

impl SortOrder {
    /// Missing sort means "recent"; any other keyword means oldest first.
    pub fn from_param(sort: Option<&str>) -> Self {
        match sort {
            None | Some("recent") => SortOrder::Recent,
            Some(_) => SortOrder::Oldest,
        }
    }

    fn sql(self) -> &'static str {
        match self {
            SortOrder::Recent => "DESC",
            SortOrder::Oldest => "ASC",
        }
    }
}

/// Table and columns a list endpoint reads from.
pub struct ListTarget {
    pub table: &'static str,
    pub columns: &'static str,
    pub search_column: &'static str,
    pub sort_column: &'static str,
    pub filter_by_category: bool,
}

/// Escapes LIKE metacharacters so the term matches literally.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub fn build_list_query(target: &ListTarget, params: &ListParams) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {} FROM {}", target.columns, target.table));
    let mut has_where = false;

    if let Some(search) = params.search.as_deref().filter(|s| !s.is_empty()) {
        qb.push(" WHERE ");
        qb.push(target.search_column);
        qb.push(" ILIKE ");
        qb.push_bind(format!("%{}%", escape_like(search)));
        has_where = true;
    }

    if target.filter_by_category {
        if let Some(category) = params.category.as_deref().filter(|c| !c.is_empty()) {
            qb.push(if has_where { " AND " } else { " WHERE " });
            qb.push("category = ");
            qb.push_bind(category.to_string());
        }
    }

    let order = SortOrder::from_param(params.sort.as_deref());
    qb.push(format!(" ORDER BY {} {}", target.sort_column, order.sql()));
    qb
}

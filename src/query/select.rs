//! SelectQuery aggregate root and its builder methods.

use crate::query::column::Column;
use crate::query::filter::Filter;
use crate::query::join::Join;
use crate::query::key::ColumnKey;
use crate::query::ordering::{Order, SortOrder};
use crate::query::table::TableSource;

/// Complete description of a SELECT statement, built as data by the caller
/// and consumed immutably by the rendering engine.
///
/// Top-level filters are implicitly AND-combined; an empty filter list emits
/// no WHERE clause at all.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    pub columns: Vec<Column>,
    pub from: TableSource,
    pub joins: Vec<Join>,
    pub filters: Vec<Filter>,
    pub group: Vec<ColumnKey>,
    pub order: Vec<Order>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Log the rendered statement and its values before execution
    pub logging: bool,
}

impl SelectQuery {
    pub fn from(from: TableSource) -> Self {
        Self {
            columns: Vec::new(),
            from,
            joins: Vec::new(),
            filters: Vec::new(),
            group: Vec::new(),
            order: Vec::new(),
            limit: None,
            offset: None,
            logging: false,
        }
    }

    /// Add a projected column
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Add multiple projected columns
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Add a join clause
    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Add a top-level filter (combined with AND)
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add multiple top-level filters (combined with AND)
    pub fn filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Add a GROUP BY key
    pub fn group_by(mut self, key: ColumnKey) -> Self {
        self.group.push(key);
        self
    }

    /// Add an ORDER BY entry
    pub fn order_by(mut self, key: ColumnKey, order: SortOrder) -> Self {
        self.order.push(Order { key, order });
        self
    }

    /// Add limit
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Add offset
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Enable statement logging for this query
    pub fn logging(mut self) -> Self {
        self.logging = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_query_builder_chain() {
        let query = SelectQuery::from(TableSource::new("users", "u"))
            .column(Column::source(ColumnKey::new("u", "id"), "id"))
            .column(Column::source(ColumnKey::new("u", "name"), "name"))
            .filter(Filter::eq(ColumnKey::new("u", "name"), json!("alice")))
            .order_by(ColumnKey::new("u", "id"), SortOrder::Desc)
            .limit(10)
            .offset(20);

        assert_eq!(query.columns.len(), 2);
        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.order.len(), 1);
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.offset, Some(20));
        assert!(!query.logging);
    }
}

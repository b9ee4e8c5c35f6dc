//! Statement assembler
//!
//! Concatenates the rendered fragments in canonical clause order and keeps
//! the accumulated value list in the same order the fragments appear in the
//! final text, which is the pairing the backend relies on.

use crate::errors::SqlizerError;
use crate::query::select::SelectQuery;
use crate::render::clauses::{render_groups, render_limit, render_order};
use crate::render::columns::render_columns;
use crate::render::dialect::SqlSerializer;
use crate::render::filter::render_filter_list;
use crate::render::joins::render_joins;
use crate::render::registry::OperatorRegistry;
use crate::render::sequence::ValueSequencer;
use serde_json::Value;

/// A fully rendered statement: SQL text plus its bound values, position
/// `i` of the value list pairing with placeholder `$i+1` in the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub values: Vec<Value>,
}

/// Render a SELECT query to a parameterized statement.
///
/// Clause order is fixed: SELECT, FROM, joins, WHERE, GROUP BY, ORDER BY,
/// LIMIT, OFFSET. A query that projects no columns is rejected as
/// malformed. Rendering either fully succeeds or fails before anything is
/// handed to a backend; no partial statement escapes.
pub fn render_select(
    query: &SelectQuery,
    registry: &OperatorRegistry,
    serializer: &dyn SqlSerializer,
) -> Result<Statement, SqlizerError> {
    let mut seq = ValueSequencer::new();

    let (columns, mut values) =
        render_columns(&query.columns, "", registry, serializer, &mut seq)?;

    if columns.is_empty() {
        return Err(SqlizerError::MalformedTree(
            "query projects no columns".to_string(),
        ));
    }
    let (joins, mut join_values) = render_joins(&query.joins, registry, serializer, &mut seq)?;
    values.append(&mut join_values);

    let mut parts = Vec::new();
    parts.push(format!("SELECT {}", columns.join(", ")));
    parts.push(format!(
        "FROM {}",
        serializer.serialize_table_source(&query.from)
    ));
    parts.extend(joins);

    if !query.filters.is_empty() {
        let (where_clause, mut where_values) =
            render_filter_list(&query.filters, registry, serializer, &mut seq)?;
        parts.push(format!("WHERE {}", where_clause));
        values.append(&mut where_values);
    }

    if !query.group.is_empty() {
        parts.push(format!("GROUP BY {}", render_groups(&query.group, serializer)));
    }

    if !query.order.is_empty() {
        parts.push(format!(
            "ORDER BY {}",
            render_order(&query.order, registry, serializer)?
        ));
    }

    parts.extend(render_limit(query.limit, query.offset));

    let sql = parts.join(" ");

    if query.logging {
        tracing::debug!("[SELECT] SQL: {}", sql);
        tracing::debug!("[SELECT] values: {:?}", values);
    }

    Ok(Statement { sql, values })
}

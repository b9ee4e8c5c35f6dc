//! Column-tree renderer
//!
//! Flattens a possibly-nested column tree into an ordered list of SQL
//! column expressions. Output order is depth-first declaration order, so
//! the rendered projection is deterministic for a given tree.

use crate::errors::SqlizerError;
use crate::query::column::{Column, ColumnKind};
use crate::render::dialect::SqlSerializer;
use crate::render::functions::render_function;
use crate::render::registry::OperatorRegistry;
use crate::render::sequence::ValueSequencer;
use serde_json::Value;

/// Render a column list under an alias prefix (empty at the top level).
///
/// Nested children inherit `prefix.alias` as their prefix; function columns
/// may bind literal arguments, so a value list is collected alongside the
/// expressions.
pub(crate) fn render_columns(
    columns: &[Column],
    prefix: &str,
    registry: &OperatorRegistry,
    serializer: &dyn SqlSerializer,
    seq: &mut ValueSequencer,
) -> Result<(Vec<String>, Vec<Value>), SqlizerError> {
    let mut rendered = Vec::with_capacity(columns.len());
    let mut values = Vec::new();

    for column in columns {
        let column_alias = if prefix.is_empty() {
            column.alias.clone()
        } else {
            format!("{}.{}", prefix, column.alias)
        };

        match &column.kind {
            ColumnKind::Nested(children) => {
                let (mut child_columns, mut child_values) =
                    render_columns(children, &column_alias, registry, serializer, seq)?;
                rendered.append(&mut child_columns);
                values.append(&mut child_values);
            }
            ColumnKind::Source(key) => {
                rendered.push(serializer.serialize_column(key, &column_alias));
            }
            ColumnKind::Function(call) => {
                let (expr, mut call_values) = render_function(call, registry, serializer, seq)?;
                rendered.push(serializer.serialize_alias(&expr, &column_alias));
                values.append(&mut call_values);
            }
        }
    }

    Ok((rendered, values))
}

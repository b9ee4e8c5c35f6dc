//! Join-clause renderer
//!
//! Renders each join in declaration order as
//! `<JOIN-KEYWORD> <target> ON <predicate>`, its predicate AND-combined
//! through the shared filter renderer.

use crate::errors::SqlizerError;
use crate::query::join::Join;
use crate::render::dialect::SqlSerializer;
use crate::render::filter::render_filter_list;
use crate::render::registry::OperatorRegistry;
use crate::render::sequence::ValueSequencer;
use serde_json::Value;

pub(crate) fn render_joins(
    joins: &[Join],
    registry: &OperatorRegistry,
    serializer: &dyn SqlSerializer,
    seq: &mut ValueSequencer,
) -> Result<(Vec<String>, Vec<Value>), SqlizerError> {
    let mut rendered = Vec::with_capacity(joins.len());
    let mut values = Vec::new();

    for join in joins {
        let keyword = registry
            .join_operator(join.join_type)
            .ok_or_else(|| SqlizerError::UnknownJoinType(format!("{:?}", join.join_type)))?;

        let (predicate, mut join_values) =
            render_filter_list(&join.filters, registry, serializer, seq)?;

        rendered.push(format!(
            "{} {} ON {}",
            keyword,
            serializer.serialize_table_source(&join.to),
            predicate
        ));
        values.append(&mut join_values);
    }

    Ok((rendered, values))
}

//! GROUP BY / ORDER BY / LIMIT / OFFSET renderers
//!
//! Flat key lists; no placeholders are allocated here. LIMIT and OFFSET are
//! rendered as literal integers directly in the text: they are
//! caller-controlled integers, not data values, which is the one documented
//! exception to "always parameterize".

use crate::errors::SqlizerError;
use crate::query::key::ColumnKey;
use crate::query::ordering::Order;
use crate::render::dialect::SqlSerializer;
use crate::render::registry::OperatorRegistry;

/// Comma-joined quoted GROUP BY keys in declaration order
pub(crate) fn render_groups(groups: &[ColumnKey], serializer: &dyn SqlSerializer) -> String {
    groups
        .iter()
        .map(|group| serializer.serialize_column_key(group))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-joined ORDER BY entries, each a quoted key plus direction keyword
pub(crate) fn render_order(
    orders: &[Order],
    registry: &OperatorRegistry,
    serializer: &dyn SqlSerializer,
) -> Result<String, SqlizerError> {
    let mut rendered = Vec::with_capacity(orders.len());

    for order in orders {
        let keyword = registry
            .order_operator(order.order)
            .ok_or_else(|| SqlizerError::UnknownOrderType(format!("{:?}", order.order)))?;
        rendered.push(format!(
            "{} {}",
            serializer.serialize_column_key(&order.key),
            keyword
        ));
    }

    Ok(rendered.join(", "))
}

/// LIMIT/OFFSET as literal integers
pub(crate) fn render_limit(limit: Option<i64>, offset: Option<i64>) -> Vec<String> {
    let mut clauses = Vec::new();

    if let Some(limit) = limit {
        clauses.push(format!("LIMIT {}", limit));
    }

    if let Some(offset) = offset {
        clauses.push(format!("OFFSET {}", offset));
    }

    clauses
}

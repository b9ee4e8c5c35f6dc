//! Filter (WHERE) tree renderer
//!
//! The recursive core of the engine. Joins, the top-level WHERE and nested
//! combinators all route through here, so placeholder/value ordering
//! semantics are identical everywhere predicates appear.

use crate::errors::SqlizerError;
use crate::query::filter::{Filter, Operand};
use crate::render::dialect::SqlSerializer;
use crate::render::registry::{OperatorRegistry, WhereOperator};
use crate::render::sequence::ValueSequencer;
use serde_json::Value;

/// Rendered when a combinator or membership list is empty.
const ALWAYS_TRUE: &str = "TRUE";
const ALWAYS_FALSE: &str = "FALSE";

/// Render an implicit AND-combined filter list without outer parentheses.
///
/// Used for the top-level WHERE and for join ON predicates. An empty list
/// renders the unconditional `TRUE` marker; callers that want no clause at
/// all (the statement assembler) skip the call instead.
pub(crate) fn render_filter_list(
    filters: &[Filter],
    registry: &OperatorRegistry,
    serializer: &dyn SqlSerializer,
    seq: &mut ValueSequencer,
) -> Result<(String, Vec<Value>), SqlizerError> {
    if filters.is_empty() {
        return Ok((ALWAYS_TRUE.to_string(), Vec::new()));
    }

    let mut values = Vec::new();
    let mut rendered = Vec::with_capacity(filters.len());

    for filter in filters {
        let (sql, mut filter_values) = render_filter(filter, registry, serializer, seq)?;
        rendered.push(sql);
        values.append(&mut filter_values);
    }

    Ok((rendered.join(" AND "), values))
}

/// Render a single filter node.
pub(crate) fn render_filter(
    filter: &Filter,
    registry: &OperatorRegistry,
    serializer: &dyn SqlSerializer,
    seq: &mut ValueSequencer,
) -> Result<(String, Vec<Value>), SqlizerError> {
    match filter {
        Filter::Group { operator, filters } => {
            match registry.where_operator(operator) {
                Some(WhereOperator::Group { linker }) => {
                    render_group(linker, filters, registry, serializer, seq)
                }
                Some(WhereOperator::Negation { keyword }) => {
                    render_negation(keyword, filters, registry, serializer, seq)
                }
                Some(_) => Err(SqlizerError::MalformedTree(format!(
                    "comparison operator `{}` used on a group node",
                    operator
                ))),
                None => Err(SqlizerError::UnknownOperator(operator.clone())),
            }
        }
        Filter::Comparison {
            operator,
            key,
            value,
        } => match registry.where_operator(operator) {
            Some(WhereOperator::Comparator { symbol }) => {
                render_comparison(symbol, key, value.as_ref(), serializer, seq)
            }
            Some(WhereOperator::Membership) => {
                render_membership(key, value.as_ref(), serializer, seq)
            }
            Some(_) => Err(SqlizerError::MalformedTree(format!(
                "group operator `{}` used on a comparison node",
                operator
            ))),
            None => Err(SqlizerError::UnknownOperator(operator.clone())),
        },
    }
}

/// AND/OR combinator: children joined by the infix linker, always
/// parenthesized. Empty renders the unconditional-true marker.
fn render_group(
    linker: &str,
    filters: &[Filter],
    registry: &OperatorRegistry,
    serializer: &dyn SqlSerializer,
    seq: &mut ValueSequencer,
) -> Result<(String, Vec<Value>), SqlizerError> {
    if filters.is_empty() {
        return Ok((ALWAYS_TRUE.to_string(), Vec::new()));
    }

    let mut values = Vec::new();
    let mut rendered = Vec::with_capacity(filters.len());

    for filter in filters {
        let (sql, mut filter_values) = render_filter(filter, registry, serializer, seq)?;
        rendered.push(sql);
        values.append(&mut filter_values);
    }

    let joined = rendered.join(&format!(" {} ", linker));
    Ok((format!("({})", joined), values))
}

/// NOT combinator: children are AND-combined, then wrapped. A multi-child
/// conjunction is grouped first so the negation covers all of it rather
/// than binding to the first child only.
fn render_negation(
    keyword: &str,
    filters: &[Filter],
    registry: &OperatorRegistry,
    serializer: &dyn SqlSerializer,
    seq: &mut ValueSequencer,
) -> Result<(String, Vec<Value>), SqlizerError> {
    let (inner, values) = render_filter_list(filters, registry, serializer, seq)?;

    let negated = if filters.len() > 1 {
        format!("({} ({}))", keyword, inner)
    } else {
        format!("({} {})", keyword, inner)
    };

    Ok((negated, values))
}

fn render_comparison(
    symbol: &str,
    key: &crate::query::key::ColumnKey,
    value: Option<&Operand>,
    serializer: &dyn SqlSerializer,
    seq: &mut ValueSequencer,
) -> Result<(String, Vec<Value>), SqlizerError> {
    let key_sql = serializer.serialize_column_key(key);

    match value {
        // Bare column reference standing alone in the predicate
        None => Ok((key_sql, Vec::new())),
        Some(Operand::Column(other)) => Ok((
            format!("{} {} {}", key_sql, symbol, serializer.serialize_column_key(other)),
            Vec::new(),
        )),
        Some(Operand::Literal(value)) => {
            let placeholder = seq.next();
            Ok((
                format!("{} {} {}", key_sql, symbol, placeholder),
                vec![value.clone()],
            ))
        }
        Some(Operand::List(_)) => Err(SqlizerError::MalformedTree(format!(
            "comparator `{}` cannot take an element list",
            symbol
        ))),
    }
}

/// Membership test: parenthesized comma-joined element list, order
/// preserved. An empty list renders the always-false marker and binds
/// nothing.
fn render_membership(
    key: &crate::query::key::ColumnKey,
    value: Option<&Operand>,
    serializer: &dyn SqlSerializer,
    seq: &mut ValueSequencer,
) -> Result<(String, Vec<Value>), SqlizerError> {
    let elements = match value {
        Some(Operand::List(elements)) => elements,
        _ => {
            return Err(SqlizerError::MalformedTree(
                "membership operator requires an element list".to_string(),
            ))
        }
    };

    if elements.is_empty() {
        return Ok((ALWAYS_FALSE.to_string(), Vec::new()));
    }

    let mut values = Vec::new();
    let mut rendered = Vec::with_capacity(elements.len());

    for element in elements {
        match element {
            Operand::Column(other) => rendered.push(serializer.serialize_column_key(other)),
            Operand::Literal(value) => {
                rendered.push(seq.next());
                values.push(value.clone());
            }
            Operand::List(_) => {
                return Err(SqlizerError::MalformedTree(
                    "membership list cannot hold a nested list".to_string(),
                ))
            }
        }
    }

    Ok((
        format!(
            "{} IN ({})",
            serializer.serialize_column_key(key),
            rendered.join(", ")
        ),
        values,
    ))
}

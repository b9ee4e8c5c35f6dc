//! Boolean predicate trees for WHERE clauses and join conditions.

use crate::query::key::ColumnKey;
use serde_json::Value;

/// Right-hand operand of a comparison or function argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A bound literal; allocates one placeholder at render time
    Literal(Value),
    /// A reference to another column; renders as a quoted identifier,
    /// no placeholder, no value emitted
    Column(ColumnKey),
    /// An ordered element list for membership tests
    List(Vec<Operand>),
}

/// A node in the boolean filter tree.
///
/// Group nodes combine child filters under a combinator operator
/// (`and` / `or` / `not`); comparison nodes compare a column against an
/// operand. Operator names are resolved against the where-operator registry
/// at render time, so an unknown name is a configuration error, not a
/// silently dropped clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Group {
        operator: String,
        filters: Vec<Filter>,
    },
    Comparison {
        operator: String,
        key: ColumnKey,
        /// `None` renders the bare key, used for boolean-typed columns
        /// standing alone in a predicate
        value: Option<Operand>,
    },
}

impl Filter {
    /// Create a comparison node with an arbitrary registry operator
    pub fn comparison(operator: impl Into<String>, key: ColumnKey, value: Option<Operand>) -> Self {
        Self::Comparison {
            operator: operator.into(),
            key,
            value,
        }
    }

    /// Create AND group
    pub fn and(filters: Vec<Filter>) -> Self {
        Self::Group {
            operator: "and".to_string(),
            filters,
        }
    }

    /// Create OR group
    pub fn or(filters: Vec<Filter>) -> Self {
        Self::Group {
            operator: "or".to_string(),
            filters,
        }
    }

    /// Create NOT group
    pub fn not(filters: Vec<Filter>) -> Self {
        Self::Group {
            operator: "not".to_string(),
            filters,
        }
    }

    /// Equality against a bound literal
    pub fn eq(key: ColumnKey, value: Value) -> Self {
        Self::comparison("=", key, Some(Operand::Literal(value)))
    }

    /// Inequality against a bound literal
    pub fn ne(key: ColumnKey, value: Value) -> Self {
        Self::comparison("!=", key, Some(Operand::Literal(value)))
    }

    /// Greater than a bound literal
    pub fn gt(key: ColumnKey, value: Value) -> Self {
        Self::comparison(">", key, Some(Operand::Literal(value)))
    }

    /// Greater than or equal to a bound literal
    pub fn gte(key: ColumnKey, value: Value) -> Self {
        Self::comparison(">=", key, Some(Operand::Literal(value)))
    }

    /// Less than a bound literal
    pub fn lt(key: ColumnKey, value: Value) -> Self {
        Self::comparison("<", key, Some(Operand::Literal(value)))
    }

    /// Less than or equal to a bound literal
    pub fn lte(key: ColumnKey, value: Value) -> Self {
        Self::comparison("<=", key, Some(Operand::Literal(value)))
    }

    /// Equality against another column
    pub fn eq_column(key: ColumnKey, other: ColumnKey) -> Self {
        Self::comparison("=", key, Some(Operand::Column(other)))
    }

    /// Membership in a list of bound literals
    pub fn in_values(key: ColumnKey, values: Vec<Value>) -> Self {
        let elements = values.into_iter().map(Operand::Literal).collect();
        Self::comparison("in", key, Some(Operand::List(elements)))
    }

    /// Membership in a mixed list of literals and column references
    pub fn in_operands(key: ColumnKey, elements: Vec<Operand>) -> Self {
        Self::comparison("in", key, Some(Operand::List(elements)))
    }

    /// Bare column reference standing alone in a predicate
    pub fn standalone(key: ColumnKey) -> Self {
        Self::comparison("=", key, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_eq() {
        let filter = Filter::eq(ColumnKey::new("u", "name"), json!("alice"));
        match filter {
            Filter::Comparison {
                operator,
                key,
                value,
            } => {
                assert_eq!(operator, "=");
                assert_eq!(key.field, "name");
                assert_eq!(value, Some(Operand::Literal(json!("alice"))));
            }
            _ => panic!("Expected Comparison variant"),
        }
    }

    #[test]
    fn test_filter_nested_groups() {
        let inner = Filter::or(vec![
            Filter::eq(ColumnKey::new("u", "status"), json!("active")),
            Filter::eq(ColumnKey::new("u", "status"), json!("pending")),
        ]);

        let outer = Filter::and(vec![
            inner,
            Filter::gt(ColumnKey::new("u", "age"), json!(18)),
        ]);

        match outer {
            Filter::Group { operator, filters } => {
                assert_eq!(operator, "and");
                assert_eq!(filters.len(), 2);
                assert!(matches!(filters[0], Filter::Group { .. }));
            }
            _ => panic!("Expected Group variant"),
        }
    }

    #[test]
    fn test_filter_in_values_keeps_order() {
        let filter = Filter::in_values(ColumnKey::new("u", "id"), vec![json!(1), json!(2)]);
        match filter {
            Filter::Comparison {
                value: Some(Operand::List(elements)),
                ..
            } => {
                assert_eq!(elements[0], Operand::Literal(json!(1)));
                assert_eq!(elements[1], Operand::Literal(json!(2)));
            }
            _ => panic!("Expected membership comparison"),
        }
    }

    #[test]
    fn test_filter_standalone_has_no_value() {
        let filter = Filter::standalone(ColumnKey::new("u", "is_enabled"));
        assert!(matches!(
            filter,
            Filter::Comparison { value: None, .. }
        ));
    }
}

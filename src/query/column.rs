use crate::query::function::FunctionCall;
use crate::query::key::ColumnKey;

/// What a projected column resolves to.
///
/// The closed set of variants makes "exactly one of source / nested /
/// function" a structural guarantee rather than a runtime check.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKind {
    /// A field of a source table, referenced by table alias + field name
    Source(ColumnKey),
    /// An ordered group of child columns; output aliases are prefixed with
    /// this column's alias during rendering
    Nested(Vec<Column>),
    /// A computed column produced by a function call
    Function(FunctionCall),
}

/// A projected output field of a SELECT query.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Output name; unique at its nesting level
    pub alias: String,
    pub kind: ColumnKind,
}

impl Column {
    /// Project a source field under an output alias
    pub fn source(key: ColumnKey, alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            kind: ColumnKind::Source(key),
        }
    }

    /// Group child columns under a shared alias prefix
    pub fn nested(alias: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            alias: alias.into(),
            kind: ColumnKind::Nested(columns),
        }
    }

    /// Project a computed column produced by a function call
    pub fn function(call: FunctionCall, alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            kind: ColumnKind::Function(call),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_source() {
        let column = Column::source(ColumnKey::new("u", "first_name"), "firstName");
        assert_eq!(column.alias, "firstName");
        assert_eq!(
            column.kind,
            ColumnKind::Source(ColumnKey::new("u", "first_name"))
        );
    }

    #[test]
    fn test_column_nested() {
        let column = Column::nested(
            "address",
            vec![
                Column::source(ColumnKey::new("a", "street"), "street"),
                Column::source(ColumnKey::new("a", "city"), "city"),
            ],
        );

        match column.kind {
            ColumnKind::Nested(children) => assert_eq!(children.len(), 2),
            _ => panic!("Expected Nested variant"),
        }
    }
}

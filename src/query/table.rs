/// A queryable relation reference, used both as the primary FROM target and
/// as a join target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSource {
    /// Schema the table lives in; `None` lets the dialect substitute its
    /// default schema (e.g. `public` on PostgreSQL)
    pub schema: Option<String>,
    /// Table name
    pub table: String,
    /// Alias the table is referred to by in the rest of the statement
    pub alias: String,
}

impl TableSource {
    /// Create a table source in the dialect's default schema
    pub fn new(table: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: table.into(),
            alias: alias.into(),
        }
    }

    /// Create a table source with an explicit schema
    pub fn with_schema(
        schema: impl Into<String>,
        table: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            schema: Some(schema.into()),
            table: table.into(),
            alias: alias.into(),
        }
    }
}

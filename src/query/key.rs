/// Fully-qualified reference to an existing column: table alias + field name.
///
/// Usable wherever a value position may name another column instead of a
/// bound literal (comparison operands, IN lists, function arguments,
/// GROUP BY / ORDER BY keys).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnKey {
    /// Alias of the table the column belongs to
    pub alias: String,
    /// Column name inside that table
    pub field: String,
}

impl ColumnKey {
    pub fn new(alias: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_key_new() {
        let key = ColumnKey::new("users", "id");
        assert_eq!(key.alias, "users");
        assert_eq!(key.field, "id");
    }
}

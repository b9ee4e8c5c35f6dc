//! Dialect serializers
//!
//! The capability boundary hiding identifier quoting and table/column/alias
//! formatting rules for a specific backend.

use crate::query::key::ColumnKey;
use crate::query::table::TableSource;

/// Backend-specific identifier formatting.
///
/// The recursive renderers are written once against this trait; each backend
/// supplies only its quoting and default-schema policy.
pub trait SqlSerializer: Send + Sync {
    /// Quoted `alias.field` reference
    fn serialize_column_key(&self, key: &ColumnKey) -> String;

    /// Quoted `schema.table AS alias` reference, applying the backend's
    /// default-schema substitution when none is given
    fn serialize_table_source(&self, table: &TableSource) -> String;

    /// Quoted source column with its output alias
    fn serialize_column(&self, key: &ColumnKey, output_alias: &str) -> String;

    /// Arbitrary rendered expression with an output alias
    fn serialize_alias(&self, expr: &str, alias: &str) -> String;
}

/// PostgreSQL identifier formatting: double-quoted identifiers, `public`
/// default schema.
#[derive(Debug, Clone, Default)]
pub struct PostgresSerializer;

impl SqlSerializer for PostgresSerializer {
    fn serialize_column_key(&self, key: &ColumnKey) -> String {
        format!(r#""{}"."{}""#, key.alias, key.field)
    }

    fn serialize_table_source(&self, table: &TableSource) -> String {
        let schema = table.schema.as_deref().unwrap_or("public");
        format!(r#""{}"."{}" AS "{}""#, schema, table.table, table.alias)
    }

    fn serialize_column(&self, key: &ColumnKey, output_alias: &str) -> String {
        if key.alias.is_empty() {
            format!(r#""{}" AS "{}""#, key.field, output_alias)
        } else {
            format!(r#""{}"."{}" AS "{}""#, key.alias, key.field, output_alias)
        }
    }

    fn serialize_alias(&self, expr: &str, alias: &str) -> String {
        format!(r#"{} AS "{}""#, expr, alias)
    }
}

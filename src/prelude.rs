//! Convenience re-exports for the common calling pattern: build a
//! [`SelectQuery`], connect a [`Postgres`] driver, run it.

pub use crate::config::{AppConfig, DatabaseConfig};
pub use crate::errors::SqlizerError;
pub use crate::executor::{Postgres, QueryExecutor};
pub use crate::query::{
    Column, ColumnKey, ColumnKind, Filter, FunctionCall, Join, JoinType, Operand, Order,
    SelectQuery, SortOrder, TableSource,
};
pub use crate::render::{
    render_select, OperatorRegistry, PostgresSerializer, SqlSerializer, Statement,
};
pub use crate::DbPool;

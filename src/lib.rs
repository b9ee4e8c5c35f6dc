//! # sqlizer
//!
//! Build relational SELECT queries as data and render them to parameterized
//! PostgreSQL statements. User values are always bound through positional
//! placeholders (`$1, $2, …`), never interpolated into the text.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sqlizer::prelude::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "app".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let db = Postgres::connect(&config).await?;
//!
//!     let query = SelectQuery::from(TableSource::new("users", "u"))
//!         .column(Column::source(ColumnKey::new("u", "id"), "id"))
//!         .column(Column::source(ColumnKey::new("u", "name"), "name"))
//!         .filter(Filter::eq(ColumnKey::new("u", "status"), json!("active")))
//!         .order_by(ColumnKey::new("u", "id"), SortOrder::Desc)
//!         .limit(20);
//!
//!     let rows = db.select(&query).await?;
//!     println!("fetched {} rows", rows.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod errors;
pub mod executor;
pub mod prelude;
pub mod query;
pub mod render;

pub use config::{AppConfig, ConfigError, DatabaseConfig};
pub use errors::SqlizerError;
pub use executor::{Postgres, QueryExecutor};
pub use query::{
    Column, ColumnKey, ColumnKind, Filter, FunctionCall, Join, JoinType, Operand, Order,
    SelectQuery, SortOrder, TableSource,
};
pub use render::{
    render_select, FunctionOperator, OperatorRegistry, PostgresSerializer, SqlSerializer,
    Statement, ValueSequencer, WhereOperator,
};

// Re-export external dependencies used in the public API
pub use async_trait;
pub use sqlx;

use sqlx::PgPool;

pub type DbPool = PgPool;

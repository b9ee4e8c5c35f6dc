//! Query execution
//!
//! The narrow "run statement, get rows" contract the rendering core hands
//! its output to, plus the PostgreSQL driver implementing it on an sqlx
//! connection pool.

use crate::config::DatabaseConfig;
use crate::errors::SqlizerError;
use crate::query::select::SelectQuery;
use crate::render::dialect::PostgresSerializer;
use crate::render::registry::OperatorRegistry;
use crate::render::statement::{render_select, Statement};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::PgPool;
use std::time::Duration;

// Shared parameter binding logic: JSON literals are bound with a concrete
// Postgres type. Strings are tried as RFC3339 timestamps, then UUIDs,
// before falling back to text.
macro_rules! bind_json_param {
    ($query:expr, $param:expr) => {
        match $param {
            serde_json::Value::String(s) => {
                if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&s) {
                    $query.bind(dt.with_timezone(&chrono::Utc))
                } else if let Ok(uuid) = uuid::Uuid::parse_str(&s) {
                    $query.bind(uuid)
                } else {
                    $query.bind(s)
                }
            }
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                        $query.bind(i as i32)
                    } else {
                        $query.bind(i)
                    }
                } else if let Some(f) = n.as_f64() {
                    $query.bind(f)
                } else {
                    $query.bind(n.to_string())
                }
            }
            serde_json::Value::Bool(b) => $query.bind(b),
            serde_json::Value::Null => $query.bind(Option::<String>::None),
            other => $query.bind(other.to_string()),
        }
    };
}

/// Executes a rendered statement against a backend.
///
/// The rendering core depends only on this contract, not on connection
/// lifecycle; retries, backpressure and cancellation are the implementor's
/// concern.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn run(&self, sql: &str, values: Vec<Value>) -> Result<Vec<PgRow>, SqlizerError>;
}

#[async_trait]
impl QueryExecutor for PgPool {
    async fn run(&self, sql: &str, values: Vec<Value>) -> Result<Vec<PgRow>, SqlizerError> {
        let mut query = sqlx::query(sql);

        for value in values {
            query = bind_json_param!(query, value);
        }

        let rows = query.fetch_all(self).await?;
        Ok(rows)
    }
}

/// PostgreSQL driver: a connection pool plus the registry and serializer
/// every render on this backend shares.
pub struct Postgres {
    pool: PgPool,
    registry: OperatorRegistry,
    serializer: PostgresSerializer,
}

impl Postgres {
    /// Connect with the standard operator registry
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, SqlizerError> {
        Self::connect_with_registry(config, OperatorRegistry::default()).await
    }

    /// Connect with a caller-supplied operator registry
    pub async fn connect_with_registry(
        config: &DatabaseConfig,
        registry: OperatorRegistry,
    ) -> Result<Self, SqlizerError> {
        let mut pool_options = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&config.connection_string()).await?;

        if config.start_pool_on_boot {
            for _ in 0..config.min_connections {
                sqlx::query("SELECT 1").fetch_one(&pool).await?;
            }
        }

        Ok(Self {
            pool,
            registry,
            serializer: PostgresSerializer,
        })
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Render a query without executing it
    pub fn render(&self, query: &SelectQuery) -> Result<Statement, SqlizerError> {
        render_select(query, &self.registry, &self.serializer)
    }

    /// Render a SELECT query and fetch its rows.
    ///
    /// Rendering failures abort before anything reaches the database.
    pub async fn select(&self, query: &SelectQuery) -> Result<Vec<PgRow>, SqlizerError> {
        let statement = self.render(query)?;
        self.pool.run(&statement.sql, statement.values).await
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), SqlizerError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    /// Close the pool, waiting for in-flight connections to finish.
    ///
    /// Close failures are reported through the log, never raised: a failed
    /// teardown must not take the calling process down with it.
    pub async fn close(&self) {
        self.pool.close().await;

        if !self.pool.is_closed() {
            tracing::error!("connection pool did not close cleanly");
        }
    }
}

impl std::fmt::Debug for Postgres {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Postgres")
            .field("pool_size", &self.pool.size())
            .field("closed", &self.pool.is_closed())
            .finish()
    }
}

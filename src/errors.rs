//! Error types for the sqlizer crate
//!
//! Registry lookup misses are configuration errors and abort a render before
//! anything is executed; backend errors are propagated verbatim.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlizerError {
    /// A where-operator name in the query tree has no registry entry
    #[error("Unknown where operator: {0}")]
    UnknownOperator(String),

    /// A join type in the query tree has no registry entry
    #[error("Unknown join type: {0}")]
    UnknownJoinType(String),

    /// An order direction in the query tree has no registry entry
    #[error("Unknown order type: {0}")]
    UnknownOrderType(String),

    /// A function name in the query tree has no registry entry
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// The query tree violates a structural invariant
    #[error("Malformed query tree: {0}")]
    MalformedTree(String),

    /// Propagated verbatim from the execution backend
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

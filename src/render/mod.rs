//! Query-to-SQL rendering engine
//!
//! Recursive tree-walking renderers for columns, filter trees, joins,
//! grouping, ordering and function calls, sharing one placeholder sequencer
//! per statement render so the rendered text and the bound value list stay
//! in lock-step.

pub mod clauses;
pub mod columns;
pub mod dialect;
pub mod filter;
pub mod functions;
pub mod joins;
pub mod registry;
pub mod sequence;
pub mod statement;


pub use dialect::{PostgresSerializer, SqlSerializer};
pub use registry::{FunctionOperator, OperatorRegistry, WhereOperator};
pub use sequence::ValueSequencer;
pub use statement::{render_select, Statement};

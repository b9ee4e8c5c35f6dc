//! Query description trees
//!
//! The immutable value types a caller assembles into a [`SelectQuery`]
//! before handing it to the rendering engine.

pub mod column;
pub mod filter;
pub mod function;
pub mod join;
pub mod key;
pub mod ordering;
pub mod select;
pub mod table;

pub use column::{Column, ColumnKind};
pub use filter::{Filter, Operand};
pub use function::FunctionCall;
pub use join::{Join, JoinType};
pub use key::ColumnKey;
pub use ordering::{Order, SortOrder};
pub use select::SelectQuery;
pub use table::TableSource;

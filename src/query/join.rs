use crate::query::filter::Filter;
use crate::query::table::TableSource;

/// Represents the type of SQL JOIN operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    /// INNER JOIN - returns records that have matching values in both tables
    Inner,
    /// LEFT JOIN - returns all records from the left table and matched records from the right table
    Left,
    /// RIGHT JOIN - returns all records from the right table and matched records from the left table
    Right,
}

/// A join clause: type, target relation and its ON predicate.
///
/// The filter tree is AND-combined at the top level; an empty tree renders
/// an unconditional `ON TRUE`.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub join_type: JoinType,
    /// Relation being joined in
    pub to: TableSource,
    /// Predicate of the ON clause, implicitly AND-combined
    pub filters: Vec<Filter>,
}

impl Join {
    pub fn new(join_type: JoinType, to: TableSource, filters: Vec<Filter>) -> Self {
        Self {
            join_type,
            to,
            filters,
        }
    }

    pub fn inner(to: TableSource, filters: Vec<Filter>) -> Self {
        Self::new(JoinType::Inner, to, filters)
    }

    pub fn left(to: TableSource, filters: Vec<Filter>) -> Self {
        Self::new(JoinType::Left, to, filters)
    }

    pub fn right(to: TableSource, filters: Vec<Filter>) -> Self {
        Self::new(JoinType::Right, to, filters)
    }
}

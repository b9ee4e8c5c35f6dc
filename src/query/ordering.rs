use crate::query::key::ColumnKey;

/// Sort direction for an ORDER BY entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// A single ORDER BY entry: column reference plus direction
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub key: ColumnKey,
    pub order: SortOrder,
}

impl Order {
    pub fn asc(key: ColumnKey) -> Self {
        Self {
            key,
            order: SortOrder::Asc,
        }
    }

    pub fn desc(key: ColumnKey) -> Self {
        Self {
            key,
            order: SortOrder::Desc,
        }
    }
}

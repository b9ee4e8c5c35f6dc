//! Operator registries
//!
//! Pluggable tables mapping operator, join-type, order-type and function
//! names to their rendering rules. A registry is built once at startup and
//! treated as read-only afterwards, so it can be shared freely across
//! concurrent renders.

use crate::query::join::JoinType;
use crate::query::ordering::SortOrder;
use std::collections::HashMap;

/// Rendering rule for a where-operator registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhereOperator {
    /// Combines child filters with an infix keyword (`AND` / `OR`)
    Group { linker: &'static str },
    /// Wraps the AND-combined child filters with a negation keyword
    Negation { keyword: &'static str },
    /// Infix comparison against a single operand
    Comparator { symbol: &'static str },
    /// Parenthesized element-list membership test
    Membership,
}

/// Rendering rule for a function registry entry: the SQL keyword plus an
/// optional argument-list prefix modifier (e.g. `DISTINCT`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionOperator {
    pub keyword: &'static str,
    pub modifier: &'static str,
}

/// The four operator tables the renderers dispatch against.
#[derive(Debug, Clone)]
pub struct OperatorRegistry {
    where_operators: HashMap<String, WhereOperator>,
    join_operators: HashMap<JoinType, &'static str>,
    order_operators: HashMap<SortOrder, &'static str>,
    function_operators: HashMap<String, FunctionOperator>,
}

impl OperatorRegistry {
    /// Empty registry; useful when every entry is supplied by the caller
    pub fn empty() -> Self {
        Self {
            where_operators: HashMap::new(),
            join_operators: HashMap::new(),
            order_operators: HashMap::new(),
            function_operators: HashMap::new(),
        }
    }

    /// Register or replace a where operator
    pub fn register_where(mut self, name: impl Into<String>, operator: WhereOperator) -> Self {
        self.where_operators.insert(name.into(), operator);
        self
    }

    /// Register or replace a join keyword
    pub fn register_join(mut self, join_type: JoinType, keyword: &'static str) -> Self {
        self.join_operators.insert(join_type, keyword);
        self
    }

    /// Register or replace an order keyword
    pub fn register_order(mut self, order: SortOrder, keyword: &'static str) -> Self {
        self.order_operators.insert(order, keyword);
        self
    }

    /// Register or replace a function
    pub fn register_function(
        mut self,
        name: impl Into<String>,
        operator: FunctionOperator,
    ) -> Self {
        self.function_operators.insert(name.into(), operator);
        self
    }

    pub fn where_operator(&self, name: &str) -> Option<&WhereOperator> {
        self.where_operators.get(name)
    }

    pub fn join_operator(&self, join_type: JoinType) -> Option<&'static str> {
        self.join_operators.get(&join_type).copied()
    }

    pub fn order_operator(&self, order: SortOrder) -> Option<&'static str> {
        self.order_operators.get(&order).copied()
    }

    pub fn function_operator(&self, name: &str) -> Option<&FunctionOperator> {
        self.function_operators.get(name)
    }
}

impl Default for OperatorRegistry {
    /// The standard operator tables
    fn default() -> Self {
        Self::empty()
            .register_where("and", WhereOperator::Group { linker: "AND" })
            .register_where("or", WhereOperator::Group { linker: "OR" })
            .register_where("not", WhereOperator::Negation { keyword: "NOT" })
            .register_where("=", WhereOperator::Comparator { symbol: "=" })
            .register_where("!=", WhereOperator::Comparator { symbol: "!=" })
            .register_where(">", WhereOperator::Comparator { symbol: ">" })
            .register_where(">=", WhereOperator::Comparator { symbol: ">=" })
            .register_where("<", WhereOperator::Comparator { symbol: "<" })
            .register_where("<=", WhereOperator::Comparator { symbol: "<=" })
            .register_where("in", WhereOperator::Membership)
            .register_join(JoinType::Inner, "INNER JOIN")
            .register_join(JoinType::Left, "LEFT JOIN")
            .register_join(JoinType::Right, "RIGHT JOIN")
            .register_order(SortOrder::Asc, "ASC")
            .register_order(SortOrder::Desc, "DESC")
            .register_function(
                "count",
                FunctionOperator {
                    keyword: "COUNT",
                    modifier: "",
                },
            )
            .register_function(
                "max",
                FunctionOperator {
                    keyword: "MAX",
                    modifier: "",
                },
            )
            .register_function(
                "min",
                FunctionOperator {
                    keyword: "MIN",
                    modifier: "",
                },
            )
            .register_function(
                "avg",
                FunctionOperator {
                    keyword: "AVG",
                    modifier: "",
                },
            )
            .register_function(
                "sum",
                FunctionOperator {
                    keyword: "SUM",
                    modifier: "",
                },
            )
            .register_function(
                "countDist",
                FunctionOperator {
                    keyword: "COUNT",
                    modifier: "DISTINCT",
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_where_operators() {
        let registry = OperatorRegistry::default();
        assert_eq!(
            registry.where_operator("and"),
            Some(&WhereOperator::Group { linker: "AND" })
        );
        assert_eq!(
            registry.where_operator("="),
            Some(&WhereOperator::Comparator { symbol: "=" })
        );
        assert_eq!(registry.where_operator("in"), Some(&WhereOperator::Membership));
        assert_eq!(registry.where_operator("like"), None);
    }

    #[test]
    fn test_default_registry_join_and_order_keywords() {
        let registry = OperatorRegistry::default();
        assert_eq!(registry.join_operator(JoinType::Inner), Some("INNER JOIN"));
        assert_eq!(registry.join_operator(JoinType::Left), Some("LEFT JOIN"));
        assert_eq!(registry.join_operator(JoinType::Right), Some("RIGHT JOIN"));
        assert_eq!(registry.order_operator(SortOrder::Asc), Some("ASC"));
        assert_eq!(registry.order_operator(SortOrder::Desc), Some("DESC"));
    }

    #[test]
    fn test_default_registry_functions() {
        let registry = OperatorRegistry::default();
        let count_dist = registry.function_operator("countDist").unwrap();
        assert_eq!(count_dist.keyword, "COUNT");
        assert_eq!(count_dist.modifier, "DISTINCT");
        assert_eq!(registry.function_operator("median"), None);
    }

    #[test]
    fn test_registry_is_extensible() {
        let registry = OperatorRegistry::default()
            .register_where("like", WhereOperator::Comparator { symbol: "LIKE" });
        assert_eq!(
            registry.where_operator("like"),
            Some(&WhereOperator::Comparator { symbol: "LIKE" })
        );
    }
}

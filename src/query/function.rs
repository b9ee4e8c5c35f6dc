use crate::query::filter::Operand;
use crate::query::key::ColumnKey;
use serde_json::Value;

/// An aggregate or scalar function call in a projected column.
///
/// The operator name is looked up in the function operator registry at
/// render time; column-reference arguments render as quoted identifiers
/// while literal arguments become bound placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Registry name of the function (e.g. `count`, `countDist`)
    pub operator: String,
    /// Arguments in declaration order
    pub args: Vec<Operand>,
}

impl FunctionCall {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            args: Vec::new(),
        }
    }

    /// Append a column-reference argument
    pub fn column(mut self, key: ColumnKey) -> Self {
        self.args.push(Operand::Column(key));
        self
    }

    /// Append a bound literal argument
    pub fn literal(mut self, value: Value) -> Self {
        self.args.push(Operand::Literal(value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_function_call_args_in_order() {
        let call = FunctionCall::new("count")
            .column(ColumnKey::new("u", "id"))
            .literal(json!(10));

        assert_eq!(call.operator, "count");
        assert_eq!(call.args.len(), 2);
        assert!(matches!(call.args[0], Operand::Column(_)));
        assert!(matches!(call.args[1], Operand::Literal(_)));
    }
}

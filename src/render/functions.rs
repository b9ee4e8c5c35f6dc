//! Function-call renderer
//!
//! Renders aggregate/scalar calls as `KEYWORD(MODIFIER arg, arg, …)`.
//! Column-reference arguments become quoted identifiers; every other
//! argument allocates a placeholder and is appended to the value list in
//! argument order.

use crate::errors::SqlizerError;
use crate::query::filter::Operand;
use crate::query::function::FunctionCall;
use crate::render::dialect::SqlSerializer;
use crate::render::registry::OperatorRegistry;
use crate::render::sequence::ValueSequencer;
use serde_json::Value;

pub(crate) fn render_function(
    call: &FunctionCall,
    registry: &OperatorRegistry,
    serializer: &dyn SqlSerializer,
    seq: &mut ValueSequencer,
) -> Result<(String, Vec<Value>), SqlizerError> {
    let operator = registry
        .function_operator(&call.operator)
        .ok_or_else(|| SqlizerError::UnknownFunction(call.operator.clone()))?;

    let mut values = Vec::new();
    let mut rendered = Vec::with_capacity(call.args.len());

    for arg in &call.args {
        match arg {
            Operand::Column(key) => rendered.push(serializer.serialize_column_key(key)),
            Operand::Literal(value) => {
                rendered.push(seq.next());
                values.push(value.clone());
            }
            Operand::List(_) => {
                return Err(SqlizerError::MalformedTree(format!(
                    "function `{}` cannot take an element list argument",
                    call.operator
                )))
            }
        }
    }

    let args = rendered.join(", ");
    let sql = if operator.modifier.is_empty() {
        format!("{}({})", operator.keyword, args)
    } else {
        format!("{}({} {})", operator.keyword, operator.modifier, args)
    };

    Ok((sql, values))
}

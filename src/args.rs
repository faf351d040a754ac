//! Argument checks for the call boundary.
//!
//! Host values arrive as [`serde_json::Value`]. Only `Value::String` is text.

use serde_json::Value;

use crate::error::ArgumentError;

/// Host-facing type name of `value`, as shown in argument errors.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Accepts exactly one positional text argument and borrows it.
///
/// Text with an embedded NUL is rejected: it cannot pass through as a native
/// C-style string.
pub fn parse_single_text<'a>(function: &str, args: &'a [Value]) -> Result<&'a str, ArgumentError> {
    let [arg] = args else {
        return Err(ArgumentError::Arity {
            function: function.to_owned(),
            given: args.len(),
        });
    };

    let Value::String(text) = arg else {
        return Err(ArgumentError::Type {
            function: function.to_owned(),
            expected: "str",
            found: type_name(arg),
        });
    };

    if text.as_bytes().contains(&0) {
        return Err(ArgumentError::EmbeddedNul {
            function: function.to_owned(),
        });
    }

    Ok(text.as_str())
}

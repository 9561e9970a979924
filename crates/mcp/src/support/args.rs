#![forbid(unsafe_code)]

use crate::tools::ToolReply;
use serde_json::{Map, Value};

pub(crate) fn args_object(args: &Value) -> Result<&Map<String, Value>, ToolReply> {
    args.as_object()
        .ok_or_else(|| ToolReply::error("Invalid arguments: arguments must be an object"))
}

/// Empty strings are valid; only a missing or non-string value is rejected.
pub(crate) fn require_string(args: &Map<String, Value>, key: &str) -> Result<String, ToolReply> {
    match args.get(key) {
        Some(Value::String(v)) => Ok(v.to_string()),
        None | Some(Value::Null) => Err(ToolReply::error(format!(
            "Invalid arguments: {key} is required"
        ))),
        Some(_) => Err(ToolReply::error(format!(
            "Invalid arguments: {key} must be a string"
        ))),
    }
}

#![forbid(unsafe_code)]

mod definitions;
mod dispatch;
mod render;
mod todo;

pub(crate) use definitions::tool_definitions;
pub(crate) use dispatch::dispatch_tool;

use serde_json::{Value, json};

/// Text body plus error flag: the whole tool result envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ToolReply {
    pub(crate) text: String,
    pub(crate) is_error: bool,
}

impl ToolReply {
    pub(crate) fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    pub(crate) fn into_result(self) -> Value {
        json!({
            "content": [crate::tool_text_content(&self.text)],
            "isError": self.is_error
        })
    }
}

pub(crate) fn is_known_tool(name: &str) -> bool {
    matches!(
        name,
        "update_todo" | "update_todo_full" | "add_todo_item" | "get_latest_todo" | "search_todo"
    )
}

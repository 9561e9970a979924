#![forbid(unsafe_code)]

use super::{ToolReply, todo};
use crate::McpServer;
use serde_json::Value;
use tt_core::WriteIntent;

pub(crate) fn dispatch_tool(server: &mut McpServer, name: &str, args: Value) -> Option<ToolReply> {
    let reply = match name {
        "update_todo" => todo::handle_write(server, WriteIntent::OverwriteLatest, args),
        "update_todo_full" => todo::handle_write(server, WriteIntent::AppendRevision, args),
        "add_todo_item" => todo::handle_write(server, WriteIntent::AppendItem, args),
        "get_latest_todo" => todo::handle_get_latest(server),
        "search_todo" => todo::handle_search(server, args),
        _ => return None,
    };
    Some(reply)
}

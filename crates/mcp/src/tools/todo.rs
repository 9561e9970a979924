#![forbid(unsafe_code)]

use super::ToolReply;
use super::render::{render_fault, render_latest, render_search, write_heading};
use crate::McpServer;
use serde_json::Value;
use tt_core::{Retrieval, RevisionLog, WriteIntent};

pub(crate) fn handle_write(server: &mut McpServer, intent: WriteIntent, args: Value) -> ToolReply {
    let content = match crate::args_object(&args).and_then(|obj| crate::require_string(obj, "content"))
    {
        Ok(v) => v,
        Err(reply) => return reply,
    };

    let written = RevisionLog::new(&mut server.store).write(intent, &content);
    let id = match written {
        Ok(id) => id,
        Err(err) => {
            tracing::error!(intent = intent.as_str(), error = %err, "todo write failed");
            return ToolReply::error(render_fault(&err, &server.directive));
        }
    };
    tracing::info!(intent = intent.as_str(), id, "todo written");

    match Retrieval::new(&server.store, &server.directive).latest_with_prompt() {
        Ok(view) => ToolReply::ok(render_latest(write_heading(intent), &view)),
        Err(err) => {
            tracing::error!(intent = intent.as_str(), error = %err, "latest todo read failed");
            ToolReply::error(render_fault(&err, &server.directive))
        }
    }
}

pub(crate) fn handle_get_latest(server: &mut McpServer) -> ToolReply {
    match Retrieval::new(&server.store, &server.directive).latest_with_prompt() {
        Ok(view) => ToolReply::ok(render_latest("TODO", &view)),
        Err(err) => {
            tracing::error!(tool = "get_latest_todo", error = %err, "latest todo read failed");
            ToolReply::error(render_fault(&err, &server.directive))
        }
    }
}

pub(crate) fn handle_search(server: &mut McpServer, args: Value) -> ToolReply {
    let query =
        match crate::args_object(&args).and_then(|obj| crate::require_string(obj, "search_text")) {
            Ok(v) => v,
            Err(reply) => return reply,
        };

    match Retrieval::new(&server.store, &server.directive).search_with_prompt(&query) {
        Ok(view) => {
            tracing::debug!(hits = view.revisions.len(), "todo search");
            ToolReply::ok(render_search(&view))
        }
        Err(err) => {
            tracing::error!(tool = "search_todo", error = %err, "todo search failed");
            ToolReply::error(render_fault(&err, &server.directive))
        }
    }
}

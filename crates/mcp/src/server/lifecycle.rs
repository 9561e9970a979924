#![forbid(unsafe_code)]

use crate::McpServer;
use crate::tools::ToolReply;
use serde_json::{Value, json};
use tt_core::Directive;
use tt_storage::SqliteStore;

impl McpServer {
    pub(crate) fn new(store: SqliteStore, directive: Directive) -> Self {
        Self {
            initialized: false,
            store,
            directive,
        }
    }

    pub(crate) fn handle(&mut self, request: crate::JsonRpcRequest) -> Option<Value> {
        let method = request.method.as_str();
        let expects_response = !matches!(request.id.as_ref(), None | Some(Value::Null));
        tracing::debug!(method, "request");

        if method == "initialize" {
            // Echo the client's protocol version; fall back to our baseline when absent.
            let protocol_version = request
                .params
                .as_ref()
                .and_then(|v| v.get("protocolVersion"))
                .and_then(|v| v.as_str())
                .unwrap_or(crate::MCP_VERSION);

            return Some(crate::json_rpc_response(
                request.id,
                json!({
                    "protocolVersion": protocol_version,
                    "serverInfo": {
                        "name": crate::SERVER_NAME,
                        "version": crate::SERVER_VERSION
                    },
                    "capabilities": { "tools": {} },
                    "instructions": crate::SERVER_DESCRIPTION
                }),
            ));
        }

        if method == "notifications/initialized" || method == "initialized" {
            self.initialized = true;
            return None;
        }

        if !self.initialized {
            // Some clients skip the initialized notification; treat the first real call as it.
            if matches!(method, "tools/call" | "tools/list" | "ping") {
                self.initialized = true;
            } else if expects_response {
                return Some(crate::json_rpc_error(
                    request.id,
                    -32002,
                    "Server not initialized",
                ));
            } else {
                return None;
            }
        }

        match method {
            "ping" => return Some(crate::json_rpc_response(request.id, json!({}))),
            "resources/list" => {
                return Some(crate::json_rpc_response(
                    request.id,
                    json!({ "resources": [] }),
                ));
            }
            "resources/templates/list" => {
                return Some(crate::json_rpc_response(
                    request.id,
                    json!({ "resourceTemplates": [] }),
                ));
            }
            "prompts/list" => {
                return Some(crate::json_rpc_response(
                    request.id,
                    json!({ "prompts": [] }),
                ));
            }
            "tools/list" => {
                return Some(crate::json_rpc_response(
                    request.id,
                    json!({ "tools": crate::tools::tool_definitions() }),
                ));
            }
            _ => {}
        }

        if method == "tools/call" {
            let Some(params_obj) = request.params.as_ref().and_then(|v| v.as_object()) else {
                return Some(crate::json_rpc_error(
                    request.id,
                    -32602,
                    "params must be an object",
                ));
            };

            let tool_name = params_obj
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string();
            // Missing or null arguments mean "no arguments"; other shapes go to the validators.
            let args = match params_obj.get("arguments") {
                None | Some(Value::Null) => json!({}),
                Some(v) => v.clone(),
            };
            let reply = self.call_tool(&tool_name, args);

            return Some(crate::json_rpc_response(request.id, reply.into_result()));
        }

        if !expects_response {
            return None;
        }

        Some(crate::json_rpc_error(
            request.id,
            -32601,
            &format!("Method not found: {method}"),
        ))
    }

    pub(crate) fn call_tool(&mut self, name: &str, args: Value) -> ToolReply {
        let name = normalize_tool_name(name);
        if !crate::tools::is_known_tool(name) {
            tracing::warn!(tool = name, "unknown tool");
            return ToolReply::error(format!("Unknown tool: {name}"));
        }

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            crate::tools::dispatch_tool(self, name, args)
        }));

        match result {
            Ok(Some(reply)) => reply,
            Ok(None) => ToolReply::error(format!("Unknown tool: {name}")),
            Err(_) => ToolReply::error(format!("Internal panic while handling {name}")),
        }
    }
}

/// Accepts names prefixed with the server namespace, e.g. `tiny-todo/search_todo` or
/// `tiny_todo.search_todo`. Any other prefix is left in place and fails the tool lookup.
fn normalize_tool_name(name: &str) -> &str {
    let name = name.trim();
    for separator in ['/', '.'] {
        if let Some((prefix, suffix)) = name.split_once(separator)
            && matches!(prefix, "tiny_todo" | "tiny-todo" | "todo")
        {
            return suffix;
        }
    }
    name
}

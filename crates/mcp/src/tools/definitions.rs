#![forbid(unsafe_code)]

use serde_json::{Value, json};

fn content_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "content": { "type": "string", "description": description }
        },
        "required": ["content"]
    })
}

pub(crate) fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "name": "update_todo",
            "description": "OVERWRITE LATEST: Rewrites the most recent TODO revision in place with the given content (creates the first revision when none exists). The previous text of that revision is not kept.",
            "inputSchema": content_schema("The content of the TODO")
        }),
        json!({
            "name": "update_todo_full",
            "description": "COMPLETE REPLACEMENT: Stores the given TODO list as a new revision. Use this when you want to send a completely formatted TODO list. Previous versions are preserved as history. Input should be a full, formatted TODO list with all items.",
            "inputSchema": content_schema("The content of the TODO")
        }),
        json!({
            "name": "add_todo_item",
            "description": "SINGLE ITEM ADDITION: Adds just one new TODO item to the existing list. Use this when you want to add a specific task without modifying the rest of the list. Input should be just the task text without any formatting.",
            "inputSchema": content_schema("A single TODO item to add to the list")
        }),
        json!({
            "name": "get_latest_todo",
            "description": "Retrieves the latest TODO task with formatting prompt.",
            "inputSchema": {
                "type": "object",
                "properties": {},
                "required": []
            }
        }),
        json!({
            "name": "search_todo",
            "description": "Searches for a TODO by text and returns it with formatting prompt.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "search_text": { "type": "string", "description": "Search text in TODO content" }
                },
                "required": ["search_text"]
            }
        }),
    ]
}

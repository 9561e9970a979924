#![forbid(unsafe_code)]

mod entry;
mod server;
mod support;
mod tools;

pub(crate) use support::*;

use tt_core::Directive;
use tt_storage::SqliteStore;

const MCP_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "tiny-todo-mcp-server";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
const SERVER_DESCRIPTION: &str =
    "A specialized Model Context Protocol server that provides TODO management functionality.";

pub(crate) struct McpServer {
    initialized: bool,
    store: SqliteStore,
    directive: Directive,
}

fn usage() -> &'static str {
    "tt_mcp — tiny TODO MCP server (stdio)\n\n\
USAGE:\n\
  tt_mcp [DB_PATH] [--db PATH] [--directive-file PATH]\n\
\n\
FLAGS:\n\
  -h, --help       Print this help and exit\n\
  -V, --version    Print version and exit\n\
\n\
ENVIRONMENT:\n\
  TINY_TODO_DB               Database file (default: ./tiny-todo.db)\n\
  TINY_TODO_DIRECTIVE_FILE   Replaces the built-in formatting prompt\n\
  RUST_LOG                   Log filter for stderr logging (default: info)\n"
}

fn open_store(config: &RuntimeConfig) -> Result<SqliteStore, tt_storage::StoreError> {
    match SqliteStore::open(&config.db_path) {
        Ok(store) => Ok(store),
        // A foreign schema is a real problem; do not hide it behind a throwaway database.
        Err(err) if err.code() == "RESET_REQUIRED" => Err(err),
        Err(err) => {
            tracing::warn!(
                db = %config.db_path.display(),
                error = %err,
                "database open failed; using in-memory database"
            );
            SqliteStore::open_in_memory()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().collect::<Vec<_>>();
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        print!("{}", usage());
        return Ok(());
    }
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-V" | "--version"))
    {
        println!("tt_mcp {SERVER_VERSION}");
        return Ok(());
    }

    init_logging();
    let config = parse_runtime_config();
    install_crash_reporter(config.diagnostics_dir());

    if let Ok(cwd) = std::env::current_dir() {
        tracing::info!(cwd = %cwd.display(), "current working directory");
    }
    tracing::info!(db = %config.db_path.display(), "database path");

    let directive = load_directive(config.directive_file.as_deref()).map_err(|err| {
        tracing::error!(error = %err, "failed to load formatting directive");
        err
    })?;
    let store = open_store(&config).map_err(|err| {
        write_last_crash(&config.diagnostics_dir(), "error", &format!("{err:?}"));
        err
    })?;

    tracing::info!(
        directive = directive.version(),
        in_memory = store.is_in_memory(),
        "starting tiny TODO MCP server"
    );
    for tool in crate::tools::tool_definitions() {
        if let Some(name) = tool.get("name").and_then(|v| v.as_str()) {
            tracing::info!(tool = name, "tool available");
        }
    }

    let mut server = McpServer::new(store, directive);
    let result = entry::run_stdio(&mut server);
    match &result {
        Ok(()) => tracing::info!("server shutting down"),
        Err(err) => {
            tracing::error!(error = %err, "transport failed");
            write_last_crash(&config.diagnostics_dir(), "error", &format!("{err:?}"));
        }
    }
    result
}

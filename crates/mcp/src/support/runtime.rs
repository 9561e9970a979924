#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};
use tt_core::Directive;

pub(crate) const DB_ENV: &str = "TINY_TODO_DB";
pub(crate) const DIRECTIVE_FILE_ENV: &str = "TINY_TODO_DIRECTIVE_FILE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RuntimeConfig {
    pub(crate) db_path: PathBuf,
    pub(crate) directive_file: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Directory for diagnostics files: the database's directory, or the cwd.
    pub(crate) fn diagnostics_dir(&self) -> PathBuf {
        match self.db_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

pub(crate) fn parse_runtime_config() -> RuntimeConfig {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    runtime_config_from(&args, |key| std::env::var(key).ok())
}

/// Flags win over environment, environment wins over defaults.
pub(crate) fn runtime_config_from(
    args: &[String],
    env: impl Fn(&str) -> Option<String>,
) -> RuntimeConfig {
    RuntimeConfig {
        db_path: parse_db_path(args, &env),
        directive_file: parse_directive_file(args, &env),
    }
}

fn parse_db_path(args: &[String], env: &impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(value) = flag_value(args, "--db") {
        return PathBuf::from(value);
    }
    if let Some(first) = first_positional(args) {
        return PathBuf::from(first);
    }
    env(DB_ENV)
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(tt_storage::DEFAULT_DB_FILE))
}

fn parse_directive_file(
    args: &[String],
    env: &impl Fn(&str) -> Option<String>,
) -> Option<PathBuf> {
    flag_value(args, "--directive-file")
        .map(str::to_string)
        .or_else(|| env(DIRECTIVE_FILE_ENV).filter(|v| !v.trim().is_empty()))
        .map(PathBuf::from)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg.as_str() == flag {
            return iter.next().map(String::as_str);
        }
        if let Some(value) = arg.strip_prefix(flag).and_then(|rest| rest.strip_prefix('=')) {
            return Some(value);
        }
    }
    None
}

fn first_positional(args: &[String]) -> Option<&str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if matches!(arg.as_str(), "--db" | "--directive-file") {
            iter.next();
            continue;
        }
        if arg.starts_with('-') {
            continue;
        }
        return Some(arg.as_str());
    }
    None
}

/// Loads the formatting directive once. Without a file the built-in directive is used.
pub(crate) fn load_directive(file: Option<&Path>) -> std::io::Result<Directive> {
    let Some(path) = file else {
        return Ok(Directive::builtin());
    };
    let prompt = std::fs::read_to_string(path)?;
    let version = path
        .file_stem()
        .and_then(|v| v.to_str())
        .map(|stem| format!("file:{stem}"))
        .unwrap_or_else(|| "file".to_string());
    Ok(Directive::with_prompt(version, prompt))
}

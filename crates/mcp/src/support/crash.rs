#![forbid(unsafe_code)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

pub(crate) const CRASH_FILE: &str = "tiny_todo_last_crash.txt";

/// Best-effort crash record next to the database. Never contains request bodies.
pub(crate) fn write_last_crash(dir: &Path, kind: &str, detail: &str) {
    let _ = std::fs::create_dir_all(dir);

    let mut out = String::new();
    let _ = writeln!(out, "ts={}", crate::now_rfc3339());
    let _ = writeln!(out, "pid={}", std::process::id());
    let _ = writeln!(out, "kind={kind}");
    let _ = writeln!(out, "version={}", crate::SERVER_VERSION);
    let _ = writeln!(out, "args={:?}", std::env::args().collect::<Vec<_>>());
    let _ = writeln!(out, "detail={detail}");

    let _ = std::fs::write(dir.join(CRASH_FILE), out);
}

pub(crate) fn install_crash_reporter(dir: PathBuf) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let mut detail = info.to_string();
        let backtrace = std::backtrace::Backtrace::force_capture();
        let _ = write!(&mut detail, "\nbacktrace:\n{backtrace}");
        write_last_crash(&dir, "panic", &detail);
        default_hook(info);
    }));
}

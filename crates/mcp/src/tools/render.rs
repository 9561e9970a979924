#![forbid(unsafe_code)]

use std::fmt::Write as _;
use tt_core::{Directive, LatestView, SearchView, WriteIntent};

pub(crate) fn write_heading(intent: WriteIntent) -> &'static str {
    match intent {
        WriteIntent::OverwriteLatest => "TODO updated",
        WriteIntent::AppendRevision => "TODO list updated with new revision",
        WriteIntent::AppendItem => "TODO item added",
    }
}

pub(crate) fn render_latest(heading: &str, view: &LatestView<'_>) -> String {
    let Some(revision) = view.revision.as_ref() else {
        return render_empty(view.directive);
    };
    format!(
        "{heading}:\n{}\n\nPrompt for formatting:\n{}\n\n{}",
        revision.content,
        view.directive.prompt(),
        view.directive.holidays()
    )
}

pub(crate) fn render_empty(directive: &Directive) -> String {
    format!("No TODOs found.\n\n{}", directive.holidays())
}

pub(crate) fn render_search(view: &SearchView<'_>) -> String {
    let query = view.query.as_str();
    if view.revisions.is_empty() {
        return format!(
            "No TODOs found matching \"{query}\".\n\n{}",
            view.directive.holidays()
        );
    }

    let mut hits = String::new();
    for (idx, revision) in view.revisions.iter().enumerate() {
        if idx > 0 {
            hits.push_str("\n\n");
        }
        let _ = write!(hits, "ID: {}\nContent: {}", revision.id, revision.content);
    }
    format!(
        "Found {} TODOs matching \"{query}\":\n\n{hits}\n\nPrompt for formatting:\n{}\n\n{}",
        view.revisions.len(),
        view.directive.prompt(),
        view.directive.holidays()
    )
}

pub(crate) fn render_fault(err: &dyn std::fmt::Display, directive: &Directive) -> String {
    format!("An error occurred: {err}\n\n{}", directive.holidays())
}

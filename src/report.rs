//! Batch mode: read a command file, run every line, write the report.

use crate::interpreter::Interpreter;
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Fixed header at the top of every report.
pub const REPORT_HEADER: &str = "Output:\n==============================\n\n";

/// `\r\n` is one break; every other newline character breaks on its own.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("\r\n|[\n\r\u{000B}\u{000C}\u{0085}\u{2028}\u{2029}]")
        .expect("line break pattern is valid")
});

/// Split `text` into command lines on any newline convention.
///
/// A trailing newline leaves a final empty line, and empty text is one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK.split(text).collect()
}

/// Run every line of `text` through `interpreter` and return the full report.
pub fn render(interpreter: &mut Interpreter, text: &str) -> String {
    let mut report = String::from(REPORT_HEADER);
    report.push_str(&interpreter.run(split_lines(text)));
    report
}

/// Counts describing a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub books: usize,
    pub members: usize,
}

/// Read commands from `input`, process them with a fresh inventory and write the
/// report to `output`.
pub fn generate(input: &Path, output: &Path) -> Result<Summary> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read input file {}", input.display()))?;

    let lines = split_lines(&text);
    tracing::info!(input = %input.display(), lines = lines.len(), "processing commands");
    let mut interpreter = Interpreter::default();
    let mut report = String::from(REPORT_HEADER);
    report.push_str(&interpreter.run(lines.iter().copied()));

    fs::write(output, report)
        .with_context(|| format!("failed to write output file {}", output.display()))?;

    let inventory = interpreter.inventory();
    let summary = Summary {
        lines: lines.len(),
        books: inventory.book_count(),
        members: inventory.member_count(),
    };
    tracing::info!(
        output = %output.display(),
        books = summary.books,
        members = summary.members,
        "report written"
    );
    Ok(summary)
}

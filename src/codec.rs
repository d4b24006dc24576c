//! Line-based text format for task files.
//!
//! Each task is stored on its own line as `<name>:<true|false>`:
//!
//! ```text
//! Buy milk:false
//! Walk dog:true
//! ```
//!
//! Decoding is lenient. Lines that do not split into exactly two fields
//! on [`DELIMITER`] are collected as [`MalformedLine`]s instead of failing
//! the whole file, and blank lines are skipped.

use crate::task::Task;

/// Separator between a task's name and its completion flag.
pub const DELIMITER: char = ':';

/// Line terminator written after each record.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator written after each record.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

// ============================================================================
// Record Layout
// ============================================================================

/// How records are separated when encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordLayout {
    /// One line per task.
    #[default]
    Compact,
    /// One line per task followed by a blank line. Matches task files
    /// written by earlier versions byte for byte: a bare `\n` after the
    /// record, then the platform line ending.
    Spaced,
}

impl RecordLayout {
    fn terminator(self) -> String {
        match self {
            RecordLayout::Compact => LINE_ENDING.to_string(),
            RecordLayout::Spaced => format!("\n{LINE_ENDING}"),
        }
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// A line that could not be decoded into a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number within the file.
    pub line_number: usize,
    /// Raw line content, without its terminator.
    pub content: String,
}

/// Result of decoding a task file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded {
    pub tasks: Vec<Task>,
    pub malformed: Vec<MalformedLine>,
}

/// Decode a single non-blank line.
///
/// Returns `None` unless the line contains exactly one delimiter.
#[must_use]
pub fn decode_line(line: &str) -> Option<Task> {
    let mut fields = line.split(DELIMITER);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(name), Some(flag), None) => Some(Task::with_status(name, parse_flag(flag))),
        _ => None,
    }
}

/// `true` matches case-insensitively; everything else reads as incomplete.
fn parse_flag(field: &str) -> bool {
    field.eq_ignore_ascii_case("true")
}

/// Decode the full contents of a task file.
#[must_use]
pub fn decode(text: &str) -> Decoded {
    let mut decoded = Decoded::default();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_line(line) {
            Some(task) => decoded.tasks.push(task),
            None => decoded.malformed.push(MalformedLine {
                line_number: idx + 1,
                content: line.to_string(),
            }),
        }
    }

    decoded
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode a single task without a line terminator.
#[must_use]
pub fn encode_task(task: &Task) -> String {
    format!("{}{}{}", task.name(), DELIMITER, task.is_complete())
}

/// Encode a whole task sequence.
#[must_use]
pub fn encode(tasks: &[Task], layout: RecordLayout) -> String {
    let terminator = layout.terminator();
    tasks
        .iter()
        .map(|task| encode_task(task) + &terminator)
        .collect()
}

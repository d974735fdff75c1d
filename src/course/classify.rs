// src/course/classify.rs
use crate::config::vocab::Vocabulary;
use crate::core::RawTable;

/// What a table on a course page is, judged by its first cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Schedule grid; row 0 is the grid's own header row.
    ScheduleHeader,
    /// Opens the university-level prerequisite section.
    DependencyHeader,
    /// Leads with a course id.
    DependencyRow,
    /// Anything else, including tables too malformed to inspect.
    Ignored,
}

/// Classify one table. Never fails: a table without a readable first cell is `Ignored`.
pub fn classify(table: &RawTable, vocab: &Vocabulary) -> TableKind {
    let Some(first) = table.first_cell() else {
        return TableKind::Ignored;
    };
    if first == vocab.schedule_header {
        TableKind::ScheduleHeader
    } else if first == vocab.prereq_header {
        TableKind::DependencyHeader
    } else if is_numeric(first) {
        TableKind::DependencyRow
    } else {
        TableKind::Ignored
    }
}

/// Course-id shaped: non-empty, ASCII digits only.
pub fn is_numeric(cell: &str) -> bool {
    !cell.is_empty() && cell.bytes().all(|b| b.is_ascii_digit())
}

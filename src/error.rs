// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Anything that can stop a run. Per-course parse problems never show up here:
/// they are absorbed as ignored tables, dropped rows, or excluded courses.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("fetching {what}: {source}")]
    Fetch { what: String, #[source] source: NetError },

    #[error("reading {}: {source}", path.display())]
    Read { path: PathBuf, #[source] source: io::Error },

    #[error("writing {}: {source}", path.display())]
    Write { path: PathBuf, #[source] source: io::Error },

    #[error("encoding output: {0}")]
    Json(#[from] serde_json::Error),
}

/// User-authored records that don't have the expected shape.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read {}: {source}", path.display())]
    Io { path: PathBuf, #[source] source: io::Error },

    #[error("{}:{line}: expected `day,start,end`, found {fields} field(s)", path.display())]
    FieldCount { path: PathBuf, line: u64, fields: usize },

    #[error("{}:{line}: {field} `{value}` is not a whole number", path.display())]
    NotANumber { path: PathBuf, line: u64, field: &'static str, value: String },

    #[error("{}:{line}: day {day} is outside 1..7", path.display())]
    DayOutOfRange { path: PathBuf, line: u64, day: u32 },

    #[error("{}:{line}: start {start} is not before end {end}", path.display())]
    EmptyInterval { path: PathBuf, line: u64, start: u32, end: u32 },

    #[error("{}:{line}: {source}", path.display())]
    Csv { path: PathBuf, line: u64, #[source] source: csv::Error },
}

#[derive(Debug, Error)]
pub enum NetError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("HTTP error: {status} {host}{path}")]
    Status { status: String, host: String, path: String },

    #[error("malformed HTTP response")]
    Malformed,
}

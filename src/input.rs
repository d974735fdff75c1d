// src/input.rs
//! User-authored input records.
//!
//! - blocked times: `day,start,end` per line, no header;
//! - completed courses: one course id per line, no header.
//!
//! Unlike page content these are the user's own files, so every malformed line
//! is reported (file + line) instead of being skipped.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::course::{BlockedInterval, CompletedSet};
use crate::error::InputError;

pub fn load_blocked(path: &Path) -> Result<Vec<BlockedInterval>, InputError> {
    let file = fs::File::open(path).map_err(|source| InputError::Io { path: path.to_path_buf(), source })?;
    parse_blocked(file, path)
}

pub fn load_completed(path: &Path) -> Result<CompletedSet, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io { path: path.to_path_buf(), source })?;
    parse_completed(&text, path)
}

/// `path` is only used in error messages.
pub fn parse_blocked<R: Read>(reader: R, path: &Path) -> Result<Vec<BlockedInterval>, InputError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let fallback_line = i as u64 + 1;
        let rec = rec.map_err(|source| InputError::Csv {
            path: path.to_path_buf(),
            line: source.position().map_or(fallback_line, |p| p.line()),
            source,
        })?;
        let line = rec.position().map_or(fallback_line, |p| p.line());

        if rec.len() != 3 {
            return Err(InputError::FieldCount { path: path.to_path_buf(), line, fields: rec.len() });
        }
        let num = |idx: usize, field: &'static str| -> Result<u32, InputError> {
            rec[idx].parse::<u32>().map_err(|_| InputError::NotANumber {
                path: path.to_path_buf(),
                line,
                field,
                value: rec[idx].to_string(),
            })
        };
        let (day, start, end) = (num(0, "day")?, num(1, "start")?, num(2, "end")?);

        let day = u8::try_from(day)
            .ok()
            .filter(|d| (1..=7).contains(d))
            .ok_or(InputError::DayOutOfRange { path: path.to_path_buf(), line, day })?;
        let (start16, end16) = match (u16::try_from(start), u16::try_from(end)) {
            (Ok(s), Ok(e)) if s < e => (s, e),
            _ => return Err(InputError::EmptyInterval { path: path.to_path_buf(), line, start, end }),
        };
        out.push(BlockedInterval::new(day, start16, end16));
    }
    Ok(out)
}

/// Blank lines are skipped; anything else must be a whole number.
pub fn parse_completed(text: &str, path: &Path) -> Result<CompletedSet, InputError> {
    let mut out = CompletedSet::new();
    for (i, raw) in text.lines().enumerate() {
        let value = raw.trim();
        if value.is_empty() {
            continue;
        }
        let id = value.parse::<u32>().map_err(|_| InputError::NotANumber {
            path: path.to_path_buf(),
            line: i as u64 + 1,
            field: "course id",
            value: value.to_string(),
        })?;
        out.insert(id);
    }
    Ok(out)
}

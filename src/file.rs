// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::consts::JSON_INDENT;
use crate::config::options::ExportOptions;
use crate::course::Selection;
use crate::error::{Error, Result};

/// Write both payloads: `course id -> division` and the flat id list.
/// Returns the paths written, detail file first.
pub fn write_outputs(export: &ExportOptions, selection: &Selection) -> Result<Vec<PathBuf>> {
    ensure_directory(export.out_dir())?;

    let detail = export.detail_path();
    write_json(&detail, selection.courses())?;

    let ids = export.ids_path();
    write_json(&ids, &selection.ids())?;

    logf!("wrote {} course(s) to {} and {}", selection.len(), detail.display(), ids.display());
    Ok(vec![detail, ids])
}

/// Pretty JSON with a 4-space indent, trailing newline.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let write_err = |source| Error::Write { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut ser)?;
    out.write_all(b"\n").map_err(write_err)?;
    out.flush().map_err(write_err)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    let write_err = |source| Error::Write { path: dir.to_path_buf(), source };
    if dir.exists() && !dir.is_dir() {
        return Err(write_err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "path exists but is not a directory",
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    Ok(())
}

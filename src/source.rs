// src/source.rs
//! Page retrieval seam.
//!
//! The core only ever sees tables. A [`PageSource`] turns "the catalog page" or
//! "course N's page" into tables, either live over HTTP or from saved HTML.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::{CATALOG_PAGE_FILE, HOST, PORT};
use crate::config::options::SourceOptions;
use crate::core::net;
use crate::core::tables::{extract_tables, RawTable};
use crate::error::{Error, Result};

pub trait PageSource: Send + Sync {
    /// Tables of the program listing page.
    fn catalog(&self) -> Result<Vec<RawTable>>;

    /// Tables of one course's detail page.
    fn course(&self, course_id: u32) -> Result<Vec<RawTable>>;
}

/// Live catalog over plain HTTP.
pub struct HttpSource {
    options: SourceOptions,
}

impl HttpSource {
    pub fn new(options: SourceOptions) -> Self {
        Self { options }
    }

    fn get(&self, what: String, path: &str) -> Result<Vec<RawTable>> {
        let doc = net::http_get(HOST, PORT, path).map_err(|source| Error::Fetch { what, source })?;
        Ok(extract_tables(&doc))
    }
}

impl PageSource for HttpSource {
    fn catalog(&self) -> Result<Vec<RawTable>> {
        self.get(s!("catalog"), &self.options.catalog_path())
    }

    fn course(&self, course_id: u32) -> Result<Vec<RawTable>> {
        self.get(format!("course {course_id}"), &self.options.course_path(course_id))
    }
}

/// Saved pages: `catalog.html` plus one `<course id>.html` per course.
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    fn read(&self, file: &str) -> Result<Vec<RawTable>> {
        let path = self.dir.join(file);
        let bytes = fs::read(&path).map_err(|source| Error::Read { path, source })?;
        Ok(extract_tables(&String::from_utf8_lossy(&bytes)))
    }
}

impl PageSource for DirSource {
    fn catalog(&self) -> Result<Vec<RawTable>> {
        self.read(CATALOG_PAGE_FILE)
    }

    fn course(&self, course_id: u32) -> Result<Vec<RawTable>> {
        self.read(&format!("{course_id}.html"))
    }
}

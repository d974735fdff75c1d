// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use super::vocab::{LessonLabels, Vocabulary};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub input: InputOptions,
    pub export: ExportOptions,
    pub vocab: Vocabulary,
    pub labels: LessonLabels,
    /// Print retained course ids after the run.
    pub print: bool,
}

/// Where the pages come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageOrigin {
    /// Live catalog over HTTP.
    Http,
    /// Saved pages: `catalog.html` and `<course id>.html` in this directory.
    Dir(PathBuf),
}

/// Identifies one study program ("maslul") in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub origin: PageOrigin,
    pub year: u32,
    pub faculty: u32,
    pub chug: u32,
    pub maslul: u32,
    pub degree: u32,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            origin: PageOrigin::Http,
            year: DEFAULT_YEAR,
            faculty: 0,
            chug: 0,
            maslul: 0,
            degree: DEFAULT_DEGREE_CODE,
        }
    }
}

impl SourceOptions {
    /// Path + query of the program listing page.
    pub fn catalog_path(&self) -> String {
        format!(
            "{PREFIX}{CATALOG_PAGE}?year={}&faculty={}&entityId={}&chugId={}&degreeCode={}&maslulId={}",
            self.year, self.faculty, self.chug, self.chug, self.degree, self.maslul
        )
    }

    /// Path + query of one course's detail page.
    pub fn course_path(&self, course_id: u32) -> String {
        format!(
            "{PREFIX}{COURSE_PAGE}?faculty={}&year={}&courseId={}",
            self.faculty, self.year, course_id
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputOptions {
    pub unavailable: PathBuf,
    pub completed: PathBuf,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            unavailable: PathBuf::from(UNAVAILABLE_TIME_FILENAME),
            completed: PathBuf::from(COMPLETED_COURSES_FILENAME),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn set_out_dir<P: AsRef<Path>>(&mut self, dir: P) {
        self.out_dir = dir.as_ref().to_path_buf();
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// `course id -> division` payload.
    pub fn detail_path(&self) -> PathBuf {
        self.out_dir.join(DETAIL_FILE)
    }

    /// Flat list of retained course ids.
    pub fn ids_path(&self) -> PathBuf {
        self.out_dir.join(IDS_FILE)
    }
}

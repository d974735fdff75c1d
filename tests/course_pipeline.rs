// tests/course_pipeline.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use course_finder::config::options::{AppOptions, PageOrigin};
use course_finder::error::{Error, InputError};
use course_finder::progress::Progress;
use course_finder::runner;
use course_finder::source::DirSource;

fn pages() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pages")
}

/// Options reading the saved pages, with user input and output under `dir`.
fn options(dir: &Path, blocked: &str, completed: &str) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.source.origin = PageOrigin::Dir(pages());

    opts.input.unavailable = dir.join("unavailable_times.csv");
    opts.input.completed = dir.join("completed_courses.txt");
    fs::write(&opts.input.unavailable, blocked).unwrap();
    fs::write(&opts.input.completed, completed).unwrap();

    opts.export.set_out_dir(dir.join("out"));
    opts
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[derive(Default)]
struct Tally {
    total: usize,
    done: Vec<u32>,
    failed: Vec<u32>,
}

impl Progress for Tally {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, course_id: u32) {
        self.done.push(course_id);
    }
    fn item_failed(&mut self, course_id: u32, _reason: &str) {
        self.failed.push(course_id);
    }
}

#[test]
fn saved_pages_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = options(tmp.path(), "1,800,900\n", "67101\n");
    let mut tally = Tally::default();

    let summary = runner::run(&opts, &DirSource::new(pages()), Some(&mut tally)).unwrap();

    // duplicate listing row and the second-semester course are not fetched
    let listed: Vec<u32> = summary.catalog.iter().map(|e| e.id).collect();
    assert_eq!(listed, vec![67101, 67109, 67125, 67130, 67150]);
    assert_eq!(tally.total, 5);
    assert_eq!(summary.failed, vec![67130]);
    assert_eq!(tally.failed, vec![67130]);
    assert_eq!(tally.done.len(), 4);

    assert_eq!(summary.selection.ids(), vec![67101, 67109]);
    assert_eq!(summary.name_of(67109), Some("מבני נתונים"));

    let detail = read_json(&opts.export.detail_path());
    assert_eq!(
        detail,
        json!({
            "67101": {
                "Lecture": { "1": [[1, 1000, 1200]] },
                "TA": { "1": [[2, 900, 1000]], "2": [[3, 1400, 1500]] }
            },
            "67109": {
                "Lecture": { "2": [[4, 1000, 1200]] },
                "TA": { "1": [[5, 1200, 1300]] }
            }
        })
    );
    assert_eq!(read_json(&opts.export.ids_path()), json!([67101, 67109]));
    assert_eq!(summary.files_written, vec![opts.export.detail_path(), opts.export.ids_path()]);
}

#[test]
fn detail_file_uses_four_space_indent() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = options(tmp.path(), "", "");
    runner::run(&opts, &DirSource::new(pages()), None).unwrap();

    let text = fs::read_to_string(opts.export.detail_path()).unwrap();
    assert!(text.starts_with("{\n    \"67101\": {\n        \"Lecture\""), "{text}");
}

#[test]
fn unmet_prerequisites_exclude_the_course() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = options(tmp.path(), "", "");

    let summary = runner::run(&opts, &DirSource::new(pages()), None).unwrap();
    // nothing blocked: 67150 survives, 67109 and 67125 lack prerequisites
    assert_eq!(summary.selection.ids(), vec![67101, 67150]);
}

#[test]
fn malformed_user_input_stops_before_anything_is_written() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = options(tmp.path(), "1,800\n", "");

    let err = runner::run(&opts, &DirSource::new(pages()), None).unwrap_err();
    assert!(matches!(err, Error::Input(InputError::FieldCount { line: 1, fields: 2, .. })), "{err}");
    assert!(!opts.export.detail_path().exists());
}

#[test]
fn missing_catalog_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = options(tmp.path(), "", "");

    let err = runner::run(&opts, &DirSource::new(tmp.path()), None).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
}

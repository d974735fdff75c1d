// src/runner.rs
use std::path::PathBuf;
use std::time::Duration;

use crate::{
    config::options::{AppOptions, PageOrigin},
    course::{select, CatalogEntry, Selection},
    error::Result,
    file,
    input,
    normalize::HebrewNormalizer,
    progress::Progress,
    scrape,
    source::{DirSource, HttpSource, PageSource},
    specs,
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub catalog: Vec<CatalogEntry>,
    pub failed: Vec<u32>,
    pub selection: Selection,
    pub files_written: Vec<PathBuf>,
}

impl RunSummary {
    /// Catalog name of a retained course, if the listing had one.
    pub fn name_of(&self, id: u32) -> Option<&str> {
        self.catalog.iter().find(|e| e.id == id).map(|e| e.name.as_str())
    }
}

/// Build the page source the options ask for.
pub fn source_for(options: &AppOptions) -> Box<dyn PageSource> {
    match &options.source.origin {
        PageOrigin::Http => Box::new(HttpSource::new(options.source.clone())),
        PageOrigin::Dir(dir) => Box::new(DirSource::new(dir)),
    }
}

/// Top-level: read user input, scrape, filter, write both payloads.
///
/// User input is read first so a malformed file fails fast, before any
/// network traffic.
pub fn run(
    options: &AppOptions,
    source: &dyn PageSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let blocked = input::load_blocked(&options.input.unavailable)?;
    let completed = input::load_completed(&options.input.completed)?;
    logf!("{} blocked interval(s), {} completed course(s)", blocked.len(), completed.len());

    if let Some(p) = progress.as_deref_mut() {
        p.log("Reading catalog…");
    }
    let catalog = specs::catalog::select_offered(&source.catalog()?, &options.vocab);
    if catalog.is_empty() {
        logw!("catalog lists no first-semester courses");
        if let Some(p) = progress.as_deref_mut() {
            p.log("Catalog lists no first-semester courses.");
        }
    }

    let pause = match options.source.origin {
        PageOrigin::Http => scrape::polite_pause(),
        PageOrigin::Dir(_) => Duration::ZERO,
    };
    let normalizer = HebrewNormalizer::new(options.labels.clone());
    let batch = scrape::collect_courses(source, &catalog, &options.vocab, &normalizer, pause, progress);

    let selection = select(batch.courses, &blocked, &completed);
    logf!(
        "{} of {} course(s) retained ({} page(s) failed)",
        selection.len(),
        catalog.len(),
        batch.failed.len()
    );

    let files_written = file::write_outputs(&options.export, &selection)?;

    Ok(RunSummary { catalog, failed: batch.failed, selection, files_written })
}

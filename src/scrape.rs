// src/scrape.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
};

use crate::{
    config::consts::{ WORKERS, REQUEST_PAUSE_MS, JITTER_MS },
    config::vocab::Vocabulary,
    course::{ CatalogEntry, Course },
    normalize::Normalizer,
    progress::Progress,
    source::PageSource,
    specs,
};

/// Outcome of a batch: parsed courses (sorted by id) and the ids whose page
/// could not be fetched.
#[derive(Debug, Default)]
pub struct Batch {
    pub courses: Vec<Course>,
    pub failed: Vec<u32>,
}

/// Fetch and parse every catalog entry on a small worker pool.
/// A failing page is reported and skipped; it never stops the batch.
pub fn collect_courses(
    source: &dyn PageSource,
    entries: &[CatalogEntry],
    vocab: &Vocabulary,
    normalizer: &dyn Normalizer,
    pause: Duration,
    mut progress: Option<&mut dyn Progress>,
) -> Batch {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(entries.len());
        p.log("Fetching course pages…");
    }

    type FetchOk = Course;
    type FetchErr = (u32, String);

    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<Result<FetchOk, FetchErr>>();
    let workers = WORKERS.min(entries.len()).max(1);

    let mut batch = Batch::default();

    thread::scope(|scope| {
        for _ in 0..workers {
            let idx = &counter;
            let tx = res_tx.clone();

            scope.spawn(move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= entries.len() {
                        break;
                    }
                    let course_id = entries[i].id;
                    let result = specs::course::read(source, course_id, vocab, normalizer)
                        .map_err(|e| (course_id, e.to_string()));
                    if tx.send(result).is_err() {
                        break;
                    }
                    if !pause.is_zero() {
                        let jitter = u64::from(course_id) % JITTER_MS;
                        thread::sleep(pause + Duration::from_millis(jitter)); // be polite
                    }
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        // Aggregate results as they arrive
        for result in res_rx.iter() {
            match result {
                Ok(course) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(course.id);
                    }
                    batch.courses.push(course);
                }
                Err((id, msg)) => {
                    loge!("Course {id}: {msg}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(id, &msg);
                    }
                    batch.failed.push(id);
                }
            }
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Arrival order depends on scheduling; sort
    batch.courses.sort_by_key(|c| c.id);
    batch.failed.sort_unstable();
    batch
}

/// Default pause between requests of one worker.
pub fn polite_pause() -> Duration {
    Duration::from_millis(REQUEST_PAUSE_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawTable;
    use crate::error::{Error, Result};
    use crate::normalize::HebrewNormalizer;

    /// Course pages from memory; ids divisible by 5 fail.
    struct MemSource;
    impl PageSource for MemSource {
        fn catalog(&self) -> Result<Vec<RawTable>> {
            Ok(Vec::new())
        }
        fn course(&self, id: u32) -> Result<Vec<RawTable>> {
            if id % 5 == 0 {
                return Err(Error::Read {
                    path: format!("{id}.html").into(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }
            Ok(vec![RawTable::from_strs(&[
                &["סוג", "קבוצה", "יום", "משעה", "עד שעה", "סמסטר", "סמ'"],
                &["שעור", "א", "ב", "10:00", "12:00", "א'", "א'"],
            ])])
        }
    }

    #[derive(Default)]
    struct Recorder {
        total: usize,
        done: Vec<u32>,
        failed: Vec<u32>,
        finished: bool,
    }
    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.total = total; }
        fn item_done(&mut self, id: u32) { self.done.push(id); }
        fn item_failed(&mut self, id: u32, _reason: &str) { self.failed.push(id); }
        fn finish(&mut self) { self.finished = true; }
    }

    fn entries(ids: &[u32]) -> Vec<CatalogEntry> {
        ids.iter().map(|&id| CatalogEntry { id, name: format!("Course {id}") }).collect()
    }

    #[test]
    fn failures_do_not_abort_the_batch() {
        let ids = [9, 3, 10, 1, 7, 15, 2];
        let mut rec = Recorder::default();
        let batch = collect_courses(
            &MemSource,
            &entries(&ids),
            &Vocabulary::default(),
            &HebrewNormalizer::default(),
            Duration::ZERO,
            Some(&mut rec),
        );

        let got: Vec<u32> = batch.courses.iter().map(|c| c.id).collect();
        assert_eq!(got, vec![1, 2, 3, 7, 9]);
        assert_eq!(batch.failed, vec![10, 15]);
        assert_eq!(rec.total, ids.len());
        assert_eq!(rec.done.len() + rec.failed.len(), ids.len());
        assert!(rec.finished);
    }

    #[test]
    fn empty_catalog_is_an_empty_batch() {
        let batch = collect_courses(
            &MemSource,
            &[],
            &Vocabulary::default(),
            &HebrewNormalizer::default(),
            Duration::ZERO,
            None,
        );
        assert!(batch.courses.is_empty());
        assert!(batch.failed.is_empty());
    }
}

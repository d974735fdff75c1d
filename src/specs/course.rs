// src/specs/course.rs
//! Course detail page: one page, one [`Course`].

use crate::config::vocab::Vocabulary;
use crate::course::{parse_course, Course};
use crate::error::Result;
use crate::normalize::Normalizer;
use crate::source::PageSource;

/// Fetch one course page and interpret it. Only retrieval can fail; page
/// content problems surface as an empty or partial course.
pub fn read(
    source: &dyn PageSource,
    course_id: u32,
    vocab: &Vocabulary,
    normalizer: &dyn Normalizer,
) -> Result<Course> {
    let t = std::time::Instant::now();
    let tables = source.course(course_id)?;
    let course = parse_course(course_id, &tables, vocab, normalizer);
    logd!("course {course_id}: {} table(s) read in {:?}", tables.len(), t.elapsed());
    Ok(course)
}

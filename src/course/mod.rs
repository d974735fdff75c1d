// src/course/mod.rs
//! # Course core
//!
//! Everything between "a course page's raw tables" and "retained or not".
//!
//! ```text
//! tables ─▶ classify ─┬─▶ schedule::ScheduleBuilder ─▶ Division ─┐
//!                     └─▶ prereq::PrereqScanner ─▶ DependencySpec ┴▶ Course
//! Course ─▶ filter::accept(blocked, completed) ─▶ Some(Course) | None
//! ```
//!
//! Nothing here does IO, and nothing here fails: malformed tables are
//! ignored, malformed rows dropped, unsuitable courses filtered out.

pub mod classify;
pub mod filter;
pub mod prereq;
pub mod schedule;
pub mod types;

pub use classify::{classify, TableKind};
pub use filter::{accept, collides, dependencies_satisfied, filter_collisions, is_viable, select, Selection};
pub use types::{
    BlockedInterval, CatalogEntry, CompletedSet, Course, DependencyGroup, DependencySpec, Division, Group,
    TimeSlot,
};

use crate::config::vocab::Vocabulary;
use crate::core::RawTable;
use crate::normalize::Normalizer;

use prereq::PrereqScanner;
use schedule::ScheduleBuilder;

/// Interpret one course page's tables, in page order.
///
/// The prerequisite header is checked first; while the prerequisite section is
/// open every table belongs to it. Only then are schedule grids considered.
pub fn parse_course(id: u32, tables: &[RawTable], vocab: &Vocabulary, normalizer: &dyn Normalizer) -> Course {
    let mut schedule = ScheduleBuilder::new(vocab, normalizer);
    let mut prereqs = PrereqScanner::new(vocab);

    for (i, table) in tables.iter().enumerate() {
        let kind = classify(table, vocab);
        match kind {
            TableKind::DependencyHeader => prereqs.open(),
            _ if prereqs.is_scanning() => prereqs.feed(table),
            TableKind::ScheduleHeader => schedule.feed(table),
            TableKind::DependencyRow | TableKind::Ignored => {
                logd!("course {id}: table {i} ignored ({kind:?})");
            }
        }
    }

    let course = Course { id, division: schedule.finish(), dependencies: prereqs.finish() };
    logd!(
        "course {id}: {} lesson type(s), {} slot(s), {} prerequisite group(s)",
        course.division.lesson_types().count(),
        course.division.slot_count(),
        course.dependencies.groups().len()
    );
    course
}

//! # Page "specs"
//!
//! One module per catalog page. A spec knows which tables on its page carry the
//! ground truth and how to read them; it does not fetch, cache, filter, or
//! write anything.
//!
//! ```text
//! runner → scrape::collect_courses → source.course(id) → specs::course::read
//!        ↘ source.catalog() → specs::catalog::select_offered
//! ```
//!
//! Conventions:
//! - Input is already-extracted [`RawTable`](crate::core::RawTable)s, so specs
//!   are testable offline against saved pages.
//! - Malformed content is skipped, never an error.
pub mod catalog;
pub mod course;

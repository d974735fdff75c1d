// src/normalize.rs
//! Token normalization seam.
//!
//! The schedule builder never interprets locale-specific tokens itself; it asks a
//! [`Normalizer`] for group/day ordinals and for the lesson-type label.

use crate::config::vocab::LessonLabels;
use crate::core::gematria;

pub trait Normalizer: Send + Sync {
    /// Integer value of an ordinal token (group id, weekday). `None` if the
    /// token isn't a numeral this normalizer understands.
    fn ordinal_of(&self, token: &str) -> Option<u32>;

    /// Canonical lesson-type label; unknown tokens pass through unchanged.
    fn lesson_label(&self, token: &str) -> String;
}

/// Hebrew catalog: gematria ordinals, label table from configuration.
#[derive(Clone, Debug, Default)]
pub struct HebrewNormalizer {
    labels: LessonLabels,
}

impl HebrewNormalizer {
    pub fn new(labels: LessonLabels) -> Self {
        Self { labels }
    }
}

impl Normalizer for HebrewNormalizer {
    fn ordinal_of(&self, token: &str) -> Option<u32> {
        gematria::to_int(token)
    }

    fn lesson_label(&self, token: &str) -> String {
        self.labels.translate(token)
    }
}

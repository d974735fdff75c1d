// src/config/vocab.rs
//! Page vocabulary and lesson-label translation.
//!
//! The catalog is Hebrew. Everything the parsers compare cell text against lives
//! here so the parsers themselves only see an injected, read-only value.

use std::collections::HashMap;

/// Fixed strings that steer table interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    /// First cell of a schedule grid ("type").
    pub schedule_header: String,
    /// First cell of the prerequisite section ("university-level prerequisites").
    pub prereq_header: String,
    /// First cell of a catalog listing table ("course number").
    pub catalog_header: String,
    /// Semester discriminator for the first semester.
    pub first_semester: String,
    /// Connective meaning "one of the following".
    pub one_of: String,
    /// Connective meaning "all of the following".
    pub all_of: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            schedule_header: s!("סוג"),
            prereq_header: s!("דרישות קדם ברמת האוניברסיטה"),
            catalog_header: s!("מספר הקורס"),
            first_semester: s!("א'"),
            one_of: s!("אחד"),
            all_of: s!("את"),
        }
    }
}

/// Closed translation table for lesson-type labels; unknown labels pass through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonLabels {
    map: HashMap<String, String>,
}

impl Default for LessonLabels {
    fn default() -> Self {
        Self::from_pairs([
            ("תרגיל", "TA"),
            ("שעור", "Lecture"),
            ("שעור ותרגיל", "Lecture and TA"),
            ("מעבדה", "Lab"),
        ])
    }
}

impl LessonLabels {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { map: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn translate(&self, token: &str) -> String {
        self.map.get(token).cloned().unwrap_or_else(|| token.to_string())
    }
}

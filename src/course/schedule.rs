// src/course/schedule.rs
//! Schedule grid → [`Division`].
//!
//! Grid columns: lesson type, group, day, start, end, semester, and a trailing
//! semester discriminator. Rows are read top to bottom; which bucket a row lands
//! in depends only on the previous accepted row (see [`RowCursor`]).

use crate::config::vocab::Vocabulary;
use crate::core::RawTable;
use crate::normalize::Normalizer;

use super::types::{Division, TimeSlot};

const LESSON_COL: usize = 0;
const GROUP_COL: usize = 1;
const DAY_COL: usize = 2;
const START_COL: usize = 3;
const END_COL: usize = 4;
const OBSERVED_FIELDS: usize = 6;
const DISCRIMINATOR_COL: usize = 6;

/// Where the next slot goes relative to the previous accepted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Lesson token changed (or first row): new lesson bucket and new group.
    NewLesson,
    /// Same lesson, group token changed.
    NewGroup,
    /// Same lesson and group: append.
    Same,
}

/// Carry-state across the rows of one grid: the raw lesson and group tokens of
/// the last accepted row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowCursor {
    lesson: Option<String>,
    group: Option<String>,
}

impl RowCursor {
    pub fn step(&mut self, lesson: &str, group: &str) -> Bucket {
        let bucket = if self.lesson.as_deref() != Some(lesson) {
            Bucket::NewLesson
        } else if self.group.as_deref() != Some(group) {
            Bucket::NewGroup
        } else {
            Bucket::Same
        };
        if bucket != Bucket::Same {
            self.lesson = Some(lesson.to_string());
            self.group = Some(group.to_string());
        }
        bucket
    }
}

/// A grid row after token conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SlotRow {
    lesson: String,
    group: u32,
    slot: TimeSlot,
}

pub struct ScheduleBuilder<'a> {
    vocab: &'a Vocabulary,
    normalizer: &'a dyn Normalizer,
    division: Division,
}

impl<'a> ScheduleBuilder<'a> {
    pub fn new(vocab: &'a Vocabulary, normalizer: &'a dyn Normalizer) -> Self {
        Self { vocab, normalizer, division: Division::new() }
    }

    /// Read one schedule grid into the division. Carry-state starts fresh per grid.
    pub fn feed(&mut self, table: &RawTable) {
        let mut cursor = RowCursor::default();

        for r in 0..table.height() {
            // TODO: second-semester rows once multi-semester scheduling exists
            if table.cell(r, DISCRIMINATOR_COL) != Some(self.vocab.first_semester.as_str()) {
                continue;
            }
            let Some(fields) = observed_fields(table, r) else {
                logd!("schedule row {r}: blank field, dropped");
                continue;
            };
            let Some(row) = self.convert(&fields) else {
                logd!("schedule row {r}: unreadable {:?}, dropped", &fields[..END_COL + 1]);
                continue;
            };

            match cursor.step(fields[LESSON_COL], fields[GROUP_COL]) {
                Bucket::NewLesson => {
                    self.division.reset_lesson(&row.lesson);
                    self.division.reset_group(&row.lesson, row.group);
                }
                Bucket::NewGroup => self.division.reset_group(&row.lesson, row.group),
                Bucket::Same => {}
            }
            self.division.push_slot(&row.lesson, row.group, row.slot);
        }
    }

    pub fn finish(self) -> Division {
        self.division
    }

    fn convert(&self, fields: &[&str; OBSERVED_FIELDS]) -> Option<SlotRow> {
        let group = self.normalizer.ordinal_of(fields[GROUP_COL])?;
        let day = self.normalizer.ordinal_of(fields[DAY_COL])?;
        let day = u8::try_from(day).ok().filter(|d| (1..=7).contains(d))?;
        let start = parse_clock(fields[START_COL])?;
        let end = parse_clock(fields[END_COL])?;
        if start >= end {
            return None;
        }
        Some(SlotRow {
            lesson: self.normalizer.lesson_label(fields[LESSON_COL]),
            group,
            slot: TimeSlot::new(day, start, end),
        })
    }
}

/// The six observed fields of a row, or `None` if any is blank or missing.
fn observed_fields(table: &RawTable, r: usize) -> Option<[&str; OBSERVED_FIELDS]> {
    let mut out = [""; OBSERVED_FIELDS];
    for (c, field) in out.iter_mut().enumerate() {
        *field = table.cell(r, c)?;
    }
    Some(out)
}

/// `"13:30"` → `1330`.
pub fn parse_clock(s: &str) -> Option<u16> {
    let digits: String = s.trim().chars().filter(|&c| c != ':').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Build a division from every grid in `tables`.
pub fn build_division<'t, I>(tables: I, vocab: &Vocabulary, normalizer: &dyn Normalizer) -> Division
where
    I: IntoIterator<Item = &'t RawTable>,
{
    let mut builder = ScheduleBuilder::new(vocab, normalizer);
    for t in tables {
        builder.feed(t);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gematria;

    /// English weekday names, gematria otherwise, labels pass through.
    struct Plain;
    impl Normalizer for Plain {
        fn ordinal_of(&self, token: &str) -> Option<u32> {
            match token {
                "Sun" => Some(1),
                "Mon" => Some(2),
                "Tue" => Some(3),
                other => gematria::to_int(other),
            }
        }
        fn lesson_label(&self, token: &str) -> String {
            token.to_string()
        }
    }

    const HEADER: &[&str] = &["סוג", "קבוצה", "יום", "משעה", "עד שעה", "סמסטר", "סמ'"];

    fn build(rows: &[&[&str]]) -> Division {
        let vocab = Vocabulary::default();
        let table = RawTable::from_strs(rows);
        build_division([&table], &vocab, &Plain)
    }

    #[test]
    fn cursor_transitions() {
        let mut c = RowCursor::default();
        assert_eq!(c.step("L", "1"), Bucket::NewLesson);
        assert_eq!(c.step("L", "1"), Bucket::Same);
        assert_eq!(c.step("L", "2"), Bucket::NewGroup);
        assert_eq!(c.step("T", "2"), Bucket::NewLesson);
        assert_eq!(c.step("L", "2"), Bucket::NewLesson);
    }

    #[test]
    fn lecture_and_ta_scenario() {
        let d = build(&[
            HEADER,
            &["Lecture", "א", "Sun", "09:00", "11:00", "א'", "א'"],
            &["Lecture", "א", "Sun", "11:00", "12:00", "א'", "א'"],
            &["TA", "ב", "Mon", "13:00", "14:00", "א'", "א'"],
        ]);
        assert_eq!(
            d.group("Lecture", 1),
            Some(&vec![TimeSlot::new(1, 900, 1100), TimeSlot::new(1, 1100, 1200)])
        );
        assert_eq!(d.group("TA", 2), Some(&vec![TimeSlot::new(2, 1300, 1400)]));
        assert_eq!(d.lesson_types().count(), 2);
    }

    #[test]
    fn second_semester_rows_are_skipped() {
        let d = build(&[
            HEADER,
            &["Lecture", "א", "Sun", "09:00", "11:00", "ב'", "ב'"],
        ]);
        assert!(d.is_empty());
    }

    #[test]
    fn rows_with_blank_fields_are_dropped() {
        let d = build(&[
            HEADER,
            &["Lecture", "א", "", "09:00", "11:00", "א'", "א'"],
            &["Lecture", "א", "Sun", "10:00", "11:00", "א'", "א'"],
        ]);
        assert_eq!(d.slot_count(), 1);
        assert_eq!(d.group("Lecture", 1), Some(&vec![TimeSlot::new(1, 1000, 1100)]));
    }

    #[test]
    fn group_change_within_lesson_opens_new_group() {
        let d = build(&[
            &["Lab", "א", "Tue", "08:30", "10:00", "א'", "א'"],
            &["Lab", "ב", "Tue", "10:30", "12:00", "א'", "א'"],
            &["Lab", "ב", "Tue", "10:30", "12:00", "א'", "א'"],
        ]);
        assert_eq!(d.group("Lab", 1).map(Vec::len), Some(1));
        // repeated meetings are kept, not deduplicated
        assert_eq!(d.group("Lab", 2).map(Vec::len), Some(2));
    }

    #[test]
    fn returning_lesson_token_restarts_its_bucket() {
        let d = build(&[
            &["Lecture", "א", "Sun", "09:00", "10:00", "א'", "א'"],
            &["TA", "א", "Mon", "09:00", "10:00", "א'", "א'"],
            &["Lecture", "ב", "Tue", "09:00", "10:00", "א'", "א'"],
        ]);
        assert_eq!(d.group("Lecture", 1), None);
        assert_eq!(d.group("Lecture", 2).map(Vec::len), Some(1));
        assert_eq!(d.group("TA", 1).map(Vec::len), Some(1));
    }

    #[test]
    fn unreadable_tokens_drop_the_row() {
        let d = build(&[
            &["Lecture", "?", "Sun", "09:00", "10:00", "א'", "א'"],
            &["Lecture", "א", "Fri?", "09:00", "10:00", "א'", "א'"],
            &["Lecture", "א", "ח", "09:00", "10:00", "א'", "א'"],
            &["Lecture", "א", "Sun", "nine", "10:00", "א'", "א'"],
            &["Lecture", "א", "Sun", "11:00", "10:00", "א'", "א'"],
        ]);
        assert!(d.is_empty());
    }

    #[test]
    fn short_rows_never_contribute() {
        let d = build(&[&["Lecture", "א", "Sun", "09:00", "10:00"]]);
        assert!(d.is_empty());
    }

    #[test]
    fn clock_parsing() {
        assert_eq!(parse_clock("13:30"), Some(1330));
        assert_eq!(parse_clock(" 9:05 "), Some(905));
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("9h"), None);
    }
}

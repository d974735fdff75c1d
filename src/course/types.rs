// src/course/types.rs
use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

/// One weekly meeting: weekday ordinal (1..7) and HHMM clock values.
/// Serialized as a 3-element array `[day, start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(u8, u16, u16)", into = "(u8, u16, u16)")]
pub struct TimeSlot {
    pub day: u8,
    pub start: u16,
    pub end: u16,
}

impl TimeSlot {
    pub fn new(day: u8, start: u16, end: u16) -> Self {
        Self { day, start, end }
    }
}

impl From<(u8, u16, u16)> for TimeSlot {
    fn from((day, start, end): (u8, u16, u16)) -> Self {
        Self { day, start, end }
    }
}

impl From<TimeSlot> for (u8, u16, u16) {
    fn from(s: TimeSlot) -> Self {
        (s.day, s.start, s.end)
    }
}

/// A time the user can't attend. Same shape as a [`TimeSlot`], different origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockedInterval {
    pub day: u8,
    pub start: u16,
    pub end: u16,
}

impl BlockedInterval {
    pub fn new(day: u8, start: u16, end: u16) -> Self {
        Self { day, start, end }
    }
}

/// Meetings of one group, in table order.
pub type Group = Vec<TimeSlot>;

/// Lesson type → group id → meetings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Division {
    lessons: BTreeMap<String, BTreeMap<u32, Group>>,
}

impl Division {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn lesson_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.lessons.keys().map(String::as_str)
    }

    pub fn groups(&self, lesson: &str) -> Option<&BTreeMap<u32, Group>> {
        self.lessons.get(lesson)
    }

    pub fn group(&self, lesson: &str, group: u32) -> Option<&Group> {
        self.lessons.get(lesson)?.get(&group)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<u32, Group>)> + '_ {
        self.lessons.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total number of meetings across all lessons and groups.
    pub fn slot_count(&self) -> usize {
        self.lessons.values().flat_map(BTreeMap::values).map(Vec::len).sum()
    }

    /// Start a fresh, empty bucket for `lesson`, replacing any earlier one.
    pub fn reset_lesson(&mut self, lesson: &str) {
        self.lessons.insert(lesson.to_string(), BTreeMap::new());
    }

    /// Start a fresh, empty group under `lesson`, replacing any earlier one.
    pub fn reset_group(&mut self, lesson: &str, group: u32) {
        self.lessons.entry(lesson.to_string()).or_default().insert(group, Vec::new());
    }

    pub fn push_slot(&mut self, lesson: &str, group: u32, slot: TimeSlot) {
        self.lessons
            .entry(lesson.to_string())
            .or_default()
            .entry(group)
            .or_default()
            .push(slot);
    }

    pub(crate) fn lessons_mut(&mut self) -> &mut BTreeMap<String, BTreeMap<u32, Group>> {
        &mut self.lessons
    }
}

/// Any one of these course ids satisfies the group.
pub type DependencyGroup = BTreeSet<u32>;

/// Course ids the user has already completed.
pub type CompletedSet = HashSet<u32>;

/// AND of OR-groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySpec {
    groups: Vec<DependencyGroup>,
}

impl DependencySpec {
    pub fn new(groups: Vec<DependencyGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[DependencyGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn open_group(&mut self, id: u32) {
        self.groups.push(BTreeSet::from([id]));
    }

    /// Add to the newest group, opening one if none exists yet.
    pub(crate) fn extend_current(&mut self, id: u32) {
        match self.groups.last_mut() {
            Some(g) => { g.insert(id); }
            None => self.open_group(id),
        }
    }
}

impl<const N: usize> From<[&[u32]; N]> for DependencySpec {
    fn from(groups: [&[u32]; N]) -> Self {
        Self::new(groups.iter().map(|g| g.iter().copied().collect()).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Course {
    pub id: u32,
    pub division: Division,
    pub dependencies: DependencySpec,
}

/// One `(course id, course name)` line of the program listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_serializes_as_nested_maps_with_slot_arrays() {
        let mut d = Division::new();
        d.push_slot("Lecture", 1, TimeSlot::new(1, 900, 1100));
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"Lecture":{"1":[[1,900,1100]]}}"#);
    }

    #[test]
    fn reset_lesson_replaces_existing_bucket() {
        let mut d = Division::new();
        d.push_slot("TA", 1, TimeSlot::new(2, 1000, 1100));
        d.reset_lesson("TA");
        assert_eq!(d.groups("TA").map(BTreeMap::len), Some(0));
        assert_eq!(d.slot_count(), 0);
    }

    #[test]
    fn extend_current_opens_first_group() {
        let mut deps = DependencySpec::default();
        deps.extend_current(5);
        deps.extend_current(6);
        deps.open_group(7);
        assert_eq!(deps, DependencySpec::from([&[5, 6][..], &[7][..]]));
    }
}

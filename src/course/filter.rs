// src/course/filter.rs
//! Collision filtering and final acceptance.

use std::collections::BTreeMap;

use crate::config::consts::TIME_OFFSET;

use super::types::{BlockedInterval, CompletedSet, Course, DependencySpec, Division, TimeSlot};

/// Same day, and the slot reaches into the blocked interval padded by
/// [`TIME_OFFSET`] on both sides. Arithmetic is on the raw HHMM values.
pub fn collides(blocked: &BlockedInterval, slot: &TimeSlot) -> bool {
    if blocked.day != slot.day {
        return false;
    }
    let (b_start, b_end) = (i32::from(blocked.start), i32::from(blocked.end));
    let (s_start, s_end) = (i32::from(slot.start), i32::from(slot.end));
    if b_end + TIME_OFFSET <= s_start {
        return false;
    }
    if b_start - TIME_OFFSET >= s_end {
        return false;
    }
    true
}

/// Remove every slot that collides with any blocked interval, then drop groups
/// left without slots. Lesson types stay even when emptied; see [`is_viable`].
pub fn filter_collisions(division: &mut Division, blocked: &[BlockedInterval]) {
    for groups in division.lessons_mut().values_mut() {
        for slots in groups.values_mut() {
            slots.retain(|slot| !blocked.iter().any(|b| collides(b, slot)));
        }
        groups.retain(|_, slots| !slots.is_empty());
    }
}

/// Every group has at least one completed course (an empty spec is satisfied).
pub fn dependencies_satisfied(deps: &DependencySpec, completed: &CompletedSet) -> bool {
    deps.groups().iter().all(|group| group.iter().any(|id| completed.contains(id)))
}

/// Non-empty, and every lesson type still offers at least one group with a slot.
pub fn is_viable(division: &Division) -> bool {
    !division.is_empty()
        && division
            .iter()
            .all(|(_, groups)| groups.values().any(|slots| !slots.is_empty()))
}

/// Run one course through both filters. `None` means the course is excluded.
pub fn accept(mut course: Course, blocked: &[BlockedInterval], completed: &CompletedSet) -> Option<Course> {
    if !dependencies_satisfied(&course.dependencies, completed) {
        logd!("course {}: prerequisites not met", course.id);
        return None;
    }
    filter_collisions(&mut course.division, blocked);
    if !is_viable(&course.division) {
        logd!("course {}: no viable group left", course.id);
        return None;
    }
    Some(course)
}

/// Retained courses, keyed by course id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    courses: BTreeMap<u32, Division>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.courses.keys().copied().collect()
    }

    pub fn get(&self, id: u32) -> Option<&Division> {
        self.courses.get(&id)
    }

    pub fn courses(&self) -> &BTreeMap<u32, Division> {
        &self.courses
    }
}

/// Filter a batch. Order of `courses` does not matter; a repeated id keeps the
/// last accepted division.
pub fn select<I>(courses: I, blocked: &[BlockedInterval], completed: &CompletedSet) -> Selection
where
    I: IntoIterator<Item = Course>,
{
    let courses = courses
        .into_iter()
        .filter_map(|c| accept(c, blocked, completed))
        .map(|c| (c.id, c.division))
        .collect();
    Selection { courses }
}

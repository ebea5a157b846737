//! Immutable, ordered snapshots of the courses entered for the current term.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    course::{CourseEntry, CourseId, CourseUpdate},
    scale::GradingScale,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CourseEntry>", into = "Vec<CourseEntry>")]
/// Ordered course entries, replaced wholesale on every change.
///
/// Operations never mutate `self`; they return a new snapshot and leave every
/// clone of the old one intact. Order is insertion order and only drives the
/// displayed position.
pub struct CourseLedger {
    entries: Arc<Vec<CourseEntry>>,
}

impl CourseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger holding one blank entry, as seen at the start of a session.
    pub fn seeded(scale: GradingScale) -> Self {
        Self::from_entries(vec![CourseEntry::blank(scale)])
    }

    pub fn from_entries(entries: Vec<CourseEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn entries(&self) -> &[CourseEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: CourseId) -> Option<&CourseEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Zero-based position of `id` in display order.
    pub fn position(&self, id: CourseId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn contains(&self, id: CourseId) -> bool {
        self.position(id).is_some()
    }

    /// Returns `true` when both values share the same underlying snapshot.
    pub fn same_snapshot(&self, other: &CourseLedger) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Appends `entry` at the end.
    pub fn with_entry(&self, entry: CourseEntry) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend(self.entries.iter().cloned());
        entries.push(entry);
        Self::from_entries(entries)
    }

    /// Appends a blank entry for `scale` and returns the new snapshot with its id.
    pub fn with_blank(&self, scale: GradingScale) -> (Self, CourseId) {
        let entry = CourseEntry::blank(scale);
        let id = entry.id;
        (self.with_entry(entry), id)
    }

    /// Drops the entry matching `id`. Unknown ids yield the same snapshot.
    pub fn without(&self, id: CourseId) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        let entries = self
            .entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        Self::from_entries(entries)
    }

    /// Replaces one field of the entry matching `id`. Unknown ids yield the
    /// same snapshot.
    pub fn with_update(&self, id: CourseId, update: CourseUpdate) -> Self {
        let Some(index) = self.position(id) else {
            return self.clone();
        };
        let mut entries = self.entries.as_ref().clone();
        entries[index].apply(update);
        Self::from_entries(entries)
    }
}

impl PartialEq for CourseLedger {
    fn eq(&self, other: &Self) -> bool {
        self.same_snapshot(other) || self.entries == other.entries
    }
}

impl From<Vec<CourseEntry>> for CourseLedger {
    fn from(entries: Vec<CourseEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<CourseLedger> for Vec<CourseEntry> {
    fn from(ledger: CourseLedger) -> Self {
        Arc::try_unwrap(ledger.entries).unwrap_or_else(|shared| shared.as_ref().clone())
    }
}

impl<'a> IntoIterator for &'a CourseLedger {
    type Item = &'a CourseEntry;
    type IntoIter = std::slice::Iter<'a, CourseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

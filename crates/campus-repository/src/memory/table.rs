//! In-memory tables.

use campus_core::Resource;
use campus_domain::{Course, EnrollmentSet, Professor, Student, Subject};
use std::collections::BTreeMap;

/// Rows of one resource keyed by id, with a monotonic id counter.
///
/// Ids are never reused, even after a delete.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

fn key<I: Into<i64>>(id: I) -> i64 {
    id.into()
}

impl<T: Resource> Table<T> {
    /// Returns a copy of the row with the given id.
    #[must_use]
    pub fn get(&self, id: T::Id) -> Option<T> {
        self.rows.get(&key(id)).cloned()
    }

    /// Assigns the next id to the draft and stores it.
    pub fn insert(&mut self, draft: T::Draft) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let item = T::from_draft(T::Id::from(id), draft);
        self.rows.insert(id, item.clone());
        item
    }

    /// Overwrites an existing row. Returns false if the id is unknown.
    pub fn replace(&mut self, item: &T) -> bool {
        match self.rows.get_mut(&key(item.id())) {
            Some(slot) => {
                *slot = item.clone();
                true
            }
            None => false,
        }
    }

    /// Removes a row. Returns false if the id is unknown.
    pub fn remove(&mut self, id: T::Id) -> bool {
        self.rows.remove(&key(id)).is_some()
    }

    /// Rows in ascending id order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.values_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Every table of the in-memory store.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub students: Table<Student>,
    pub courses: Table<Course>,
    pub professors: Table<Professor>,
    pub subjects: Table<Subject>,
    pub enrollments: EnrollmentSet,
}

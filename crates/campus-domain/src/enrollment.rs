//! The student ↔ course enrollment relation.
//!
//! Each logical pair is stored once. Both directions are indexed so that
//! "courses of a student" and "students of a course" read from the same
//! relation and can never disagree.

use campus_core::{CourseId, StudentId};
use std::collections::BTreeSet;
use std::fmt;

/// One membership of a student in a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Enrollment {
    pub student: StudentId,
    pub course: CourseId,
}

impl Enrollment {
    #[must_use]
    pub const fn new(student: StudentId, course: CourseId) -> Self {
        Self { student, course }
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "aluno {} / curso {}", self.student, self.course)
    }
}

/// Set of enrollment pairs indexed by both keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentSet {
    by_student: BTreeSet<(StudentId, CourseId)>,
    by_course: BTreeSet<(CourseId, StudentId)>,
}

impl EnrollmentSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the pair is present.
    #[must_use]
    pub fn contains(&self, pair: Enrollment) -> bool {
        self.by_student.contains(&(pair.student, pair.course))
    }

    /// Adds the pair. Returns false if it was already present.
    pub fn insert(&mut self, pair: Enrollment) -> bool {
        let added = self.by_student.insert((pair.student, pair.course));
        if added {
            self.by_course.insert((pair.course, pair.student));
        }
        added
    }

    /// Removes the pair. Returns false if it was not present.
    pub fn remove(&mut self, pair: Enrollment) -> bool {
        let removed = self.by_student.remove(&(pair.student, pair.course));
        if removed {
            self.by_course.remove(&(pair.course, pair.student));
        }
        removed
    }

    /// Courses the student is enrolled in, ascending.
    #[must_use]
    pub fn courses_of(&self, student: StudentId) -> Vec<CourseId> {
        self.by_student
            .range((student, CourseId(i64::MIN))..=(student, CourseId(i64::MAX)))
            .map(|(_, course)| *course)
            .collect()
    }

    /// Students enrolled in the course, ascending.
    #[must_use]
    pub fn students_of(&self, course: CourseId) -> Vec<StudentId> {
        self.by_course
            .range((course, StudentId(i64::MIN))..=(course, StudentId(i64::MAX)))
            .map(|(_, student)| *student)
            .collect()
    }

    /// Drops every pair involving the student. Returns how many were removed.
    pub fn remove_student(&mut self, student: StudentId) -> usize {
        let courses = self.courses_of(student);
        for course in &courses {
            self.remove(Enrollment::new(student, *course));
        }
        courses.len()
    }

    /// Drops every pair involving the course. Returns how many were removed.
    pub fn remove_course(&mut self, course: CourseId) -> usize {
        let students = self.students_of(course);
        for student in &students {
            self.remove(Enrollment::new(*student, course));
        }
        students.len()
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_student.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_student.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(student: i64, course: i64) -> Enrollment {
        Enrollment::new(StudentId(student), CourseId(course))
    }

    #[test]
    fn test_insert_is_visible_from_both_sides() {
        let mut set = EnrollmentSet::new();
        assert!(set.insert(pair(1, 10)));
        assert_eq!(set.courses_of(StudentId(1)), vec![CourseId(10)]);
        assert_eq!(set.students_of(CourseId(10)), vec![StudentId(1)]);
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut set = EnrollmentSet::new();
        assert!(set.insert(pair(1, 10)));
        assert!(!set.insert(pair(1, 10)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_clears_both_sides() {
        let mut set = EnrollmentSet::new();
        set.insert(pair(1, 10));
        assert!(set.remove(pair(1, 10)));
        assert!(!set.remove(pair(1, 10)));
        assert!(set.courses_of(StudentId(1)).is_empty());
        assert!(set.students_of(CourseId(10)).is_empty());
        assert!(set.is_empty());
    }

    #[test]
    fn test_views_are_scoped_to_their_key() {
        let mut set = EnrollmentSet::new();
        set.insert(pair(1, 10));
        set.insert(pair(1, 11));
        set.insert(pair(2, 10));
        assert_eq!(set.courses_of(StudentId(1)), vec![CourseId(10), CourseId(11)]);
        assert_eq!(set.students_of(CourseId(10)), vec![StudentId(1), StudentId(2)]);
        assert!(set.courses_of(StudentId(3)).is_empty());
    }

    #[test]
    fn test_cascade_removals() {
        let mut set = EnrollmentSet::new();
        set.insert(pair(1, 10));
        set.insert(pair(1, 11));
        set.insert(pair(2, 10));

        assert_eq!(set.remove_course(CourseId(10)), 2);
        assert_eq!(set.courses_of(StudentId(1)), vec![CourseId(11)]);
        assert_eq!(set.remove_student(StudentId(1)), 1);
        assert!(set.is_empty());
    }
}

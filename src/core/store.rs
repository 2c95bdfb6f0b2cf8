use crate::domain::model::{Instructor, Student};
use crate::utils::error::{RepositoryError, Result};
use std::collections::BTreeMap;

/// Owned id-keyed maps for students and instructors. Upserts replace whole
/// records; grade records mutate both sides in place.
#[derive(Debug, Default)]
pub struct EntityStore {
    students: BTreeMap<String, Student>,
    instructors: BTreeMap<String, Instructor>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-replace; a replaced student loses any previously recorded
    /// grades (last write wins on duplicate ids).
    pub fn upsert_student(&mut self, cwid: &str, name: &str, major: &str) {
        self.students
            .insert(cwid.to_string(), Student::new(cwid, name, major));
    }

    pub fn upsert_instructor(&mut self, cwid: &str, name: &str, department: &str) {
        self.instructors
            .insert(cwid.to_string(), Instructor::new(cwid, name, department));
    }

    /// Both referenced ids must already exist; otherwise the grade load fails.
    pub fn record_grade(
        &mut self,
        student_cwid: &str,
        course: &str,
        grade: &str,
        instructor_cwid: &str,
    ) -> Result<()> {
        let student =
            self.students
                .get_mut(student_cwid)
                .ok_or_else(|| RepositoryError::UnknownStudent {
                    cwid: student_cwid.to_string(),
                })?;
        let instructor = self.instructors.get_mut(instructor_cwid).ok_or_else(|| {
            RepositoryError::UnknownInstructor {
                cwid: instructor_cwid.to_string(),
            }
        })?;

        student.add_grade(course, grade);
        instructor.add_student(course);
        Ok(())
    }

    pub fn student(&self, cwid: &str) -> Option<&Student> {
        self.students.get(cwid)
    }

    pub fn instructor(&self, cwid: &str) -> Option<&Instructor> {
        self.instructors.get(cwid)
    }

    /// Students in cwid order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub fn instructors(&self) -> impl Iterator<Item = &Instructor> {
        self.instructors.values()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn instructor_count(&self) -> usize {
        self.instructors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_store() -> EntityStore {
        let mut store = EntityStore::new();
        store.upsert_student("10103", "Baldwin, C", "SFEN");
        store.upsert_instructor("98765", "Einstein, A", "SFEN");
        store
    }

    #[test]
    fn test_record_grade_updates_both_sides() {
        let mut store = populated_store();
        store
            .record_grade("10103", "SSW 567", "A", "98765")
            .unwrap();

        assert_eq!(store.student("10103").unwrap().grade("SSW 567"), Some("A"));
        let counts: std::collections::HashMap<_, _> =
            store.instructor("98765").unwrap().courses().collect();
        assert_eq!(counts["SSW 567"], 1);
    }

    #[test]
    fn test_record_grade_unknown_student_fails() {
        let mut store = populated_store();
        let err = store
            .record_grade("99999", "SSW 567", "A", "98765")
            .unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::UnknownStudent { cwid } if cwid == "99999"
        ));
    }

    #[test]
    fn test_record_grade_unknown_instructor_fails() {
        let mut store = populated_store();
        let err = store
            .record_grade("10103", "SSW 567", "A", "11111")
            .unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::UnknownInstructor { cwid } if cwid == "11111"
        ));
    }

    #[test]
    fn test_upsert_replaces_record_and_clears_grades() {
        let mut store = populated_store();
        store
            .record_grade("10103", "SSW 567", "A", "98765")
            .unwrap();

        store.upsert_student("10103", "Baldwin, Charlie", "CS");

        let student = store.student("10103").unwrap();
        assert_eq!(student.name, "Baldwin, Charlie");
        assert_eq!(student.major, "CS");
        assert_eq!(student.grade("SSW 567"), None);
        assert!(student.passed_courses().is_empty());
    }

    #[test]
    fn test_teaching_count_accumulates_per_course() {
        let mut store = populated_store();
        store.upsert_student("10115", "Wyatt, X", "SFEN");
        store.upsert_student("10172", "Forbes, I", "SFEN");

        store
            .record_grade("10103", "SSW 567", "A", "98765")
            .unwrap();
        store
            .record_grade("10115", "SSW 567", "B", "98765")
            .unwrap();
        store
            .record_grade("10172", "SSW 567", "C", "98765")
            .unwrap();
        store
            .record_grade("10103", "SSW 540", "A", "98765")
            .unwrap();

        let counts: std::collections::HashMap<_, _> =
            store.instructor("98765").unwrap().courses().collect();
        assert_eq!(counts["SSW 567"], 3);
        assert_eq!(counts["SSW 540"], 1);
    }

    #[test]
    fn test_students_iterate_in_cwid_order() {
        let mut store = EntityStore::new();
        store.upsert_student("10183", "Chapman, O", "SFEN");
        store.upsert_student("10103", "Baldwin, C", "SFEN");
        store.upsert_student("10115", "Wyatt, X", "SFEN");

        let cwids: Vec<&str> = store.students().map(|s| s.cwid.as_str()).collect();
        assert_eq!(cwids, vec!["10103", "10115", "10183"]);
    }
}

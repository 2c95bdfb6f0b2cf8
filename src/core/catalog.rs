use crate::domain::model::{CourseFlag, MajorRequirement};
use std::collections::BTreeMap;

/// Major name -> required/elective course sets. Populated once during the
/// majors load, read-only afterwards.
#[derive(Debug, Default)]
pub struct MajorCatalog {
    majors: BTreeMap<String, MajorRequirement>,
}

impl MajorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Majors are created implicitly on first reference.
    pub fn add_course(&mut self, major: &str, flag: CourseFlag, course: &str) {
        self.majors
            .entry(major.to_string())
            .or_default()
            .add_course(flag, course);
    }

    pub fn requirement(&self, major: &str) -> Option<&MajorRequirement> {
        self.majors.get(major)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MajorRequirement)> {
        self.majors
            .iter()
            .map(|(major, requirement)| (major.as_str(), requirement))
    }

    pub fn len(&self) -> usize {
        self.majors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.majors.is_empty()
    }
}

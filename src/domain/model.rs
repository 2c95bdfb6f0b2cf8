use crate::utils::error::RepositoryError;
use serde::{Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Letter grade that does not count toward degree progress.
pub const FAILING_GRADE: &str = "F";

#[derive(Debug, Clone)]
pub struct Student {
    pub cwid: String,
    pub name: String,
    pub major: String,
    // course -> letter grade, last write wins
    grades: HashMap<String, String>,
}

impl Student {
    pub fn new(cwid: &str, name: &str, major: &str) -> Self {
        Self {
            cwid: cwid.to_string(),
            name: name.to_string(),
            major: major.to_string(),
            grades: HashMap::new(),
        }
    }

    pub fn add_grade(&mut self, course: &str, grade: &str) {
        self.grades.insert(course.to_string(), grade.to_string());
    }

    pub fn grade(&self, course: &str) -> Option<&str> {
        self.grades.get(course).map(String::as_str)
    }

    /// Courses with a grade other than the failing grade, sorted by name.
    pub fn passed_courses(&self) -> BTreeSet<String> {
        self.grades
            .iter()
            .filter(|(_, grade)| grade.as_str() != FAILING_GRADE)
            .map(|(course, _)| course.clone())
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Instructor {
    pub cwid: String,
    pub name: String,
    pub department: String,
    // course -> number of students taught, never decremented
    courses: HashMap<String, usize>,
}

impl Instructor {
    pub fn new(cwid: &str, name: &str, department: &str) -> Self {
        Self {
            cwid: cwid.to_string(),
            name: name.to_string(),
            department: department.to_string(),
            courses: HashMap::new(),
        }
    }

    pub fn add_student(&mut self, course: &str) {
        *self.courses.entry(course.to_string()).or_insert(0) += 1;
    }

    pub fn courses(&self) -> impl Iterator<Item = (&str, usize)> {
        self.courses
            .iter()
            .map(|(course, count)| (course.as_str(), *count))
    }
}

/// Category a course occupies inside a major's catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseFlag {
    Required,
    Elective,
}

impl FromStr for CourseFlag {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(CourseFlag::Required),
            "E" => Ok(CourseFlag::Elective),
            other => Err(RepositoryError::InvalidMajorFlag {
                flag: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MajorRequirement {
    required: BTreeSet<String>,
    elective: BTreeSet<String>,
}

impl MajorRequirement {
    pub fn add_course(&mut self, flag: CourseFlag, course: &str) {
        let set = match flag {
            CourseFlag::Required => &mut self.required,
            CourseFlag::Elective => &mut self.elective,
        };
        set.insert(course.to_string());
    }

    pub fn required(&self) -> &BTreeSet<String> {
        &self.required
    }

    pub fn elective(&self) -> &BTreeSet<String> {
        &self.elective
    }
}

/// Outcome of the all-or-nothing elective rule: one passed elective clears
/// the whole requirement, otherwise every elective is still outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElectiveStatus {
    Satisfied,
    Outstanding(Vec<String>),
}

impl Serialize for ElectiveStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ElectiveStatus::Satisfied => serializer.serialize_str("None"),
            ElectiveStatus::Outstanding(courses) => courses.serialize(serializer),
        }
    }
}

impl fmt::Display for ElectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElectiveStatus::Satisfied => write!(f, "None"),
            ElectiveStatus::Outstanding(courses) => write!(f, "{}", courses.join(", ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentSummary {
    pub cwid: String,
    pub name: String,
    pub major: String,
    pub completed_courses: Vec<String>,
    pub remaining_required: Vec<String>,
    pub remaining_electives: ElectiveStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructorSummary {
    pub cwid: String,
    pub name: String,
    pub department: String,
    pub course: String,
    pub students: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorSummary {
    pub major: String,
    pub required: Vec<String>,
    pub electives: Vec<String>,
}

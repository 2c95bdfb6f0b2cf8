use crate::core::catalog::MajorCatalog;
use crate::domain::model::{
    ElectiveStatus, Instructor, InstructorSummary, MajorSummary, Student, StudentSummary,
};

/// Cross-references one student against the major catalog.
///
/// A major missing from the catalog behaves as empty required and elective
/// sets: nothing outstanding on either side.
pub fn summarize_student(student: &Student, catalog: &MajorCatalog) -> StudentSummary {
    let passed = student.passed_courses();

    let (remaining_required, remaining_electives) = match catalog.requirement(&student.major) {
        Some(requirement) => {
            let remaining_required: Vec<String> =
                requirement.required().difference(&passed).cloned().collect();
            let outstanding: Vec<String> =
                requirement.elective().difference(&passed).cloned().collect();

            // All-or-nothing rule: any single passed elective satisfies the
            // whole elective requirement.
            let remaining_electives = if outstanding.len() < requirement.elective().len() {
                ElectiveStatus::Satisfied
            } else {
                ElectiveStatus::Outstanding(outstanding)
            };

            (remaining_required, remaining_electives)
        }
        None => (Vec::new(), ElectiveStatus::Outstanding(Vec::new())),
    };

    StudentSummary {
        cwid: student.cwid.clone(),
        name: student.name.clone(),
        major: student.major.clone(),
        completed_courses: passed.into_iter().collect(),
        remaining_required,
        remaining_electives,
    }
}

/// One row per distinct course taught, carrying the accumulated student count.
pub fn summarize_instructor(instructor: &Instructor) -> Vec<InstructorSummary> {
    instructor
        .courses()
        .map(|(course, students)| InstructorSummary {
            cwid: instructor.cwid.clone(),
            name: instructor.name.clone(),
            department: instructor.department.clone(),
            course: course.to_string(),
            students,
        })
        .collect()
}

pub fn summarize_majors(catalog: &MajorCatalog) -> Vec<MajorSummary> {
    catalog
        .iter()
        .map(|(major, requirement)| MajorSummary {
            major: major.to_string(),
            required: requirement.required().iter().cloned().collect(),
            electives: requirement.elective().iter().cloned().collect(),
        })
        .collect()
}

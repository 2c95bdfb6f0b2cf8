use crate::core::pipeline::Repository;
use crate::domain::model::{InstructorSummary, MajorSummary, StudentSummary};
use crate::utils::error::Result;
use serde::Serialize;

/// Aligned plain-text table with a header row and a dashed rule.
fn render_table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = widths[i]))
            .collect::<Vec<String>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header_cells: Vec<String> = headers.iter().map(|header| header.to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();

    let mut lines = vec![title.to_string()];
    lines.push(format_row(&header_cells));
    lines.push(format_row(&rule));
    for row in rows {
        lines.push(format_row(row));
    }
    lines.join("\n")
}

pub fn student_table(rows: &[StudentSummary]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.cwid.clone(),
                row.name.clone(),
                row.major.clone(),
                row.completed_courses.join(", "),
                row.remaining_required.join(", "),
                row.remaining_electives.to_string(),
            ]
        })
        .collect();

    render_table(
        "Student Summary",
        &[
            "CWID",
            "Name",
            "Major",
            "Completed Courses",
            "Remaining Required",
            "Remaining Electives",
        ],
        &cells,
    )
}

pub fn instructor_table(rows: &[InstructorSummary]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.cwid.clone(),
                row.name.clone(),
                row.department.clone(),
                row.course.clone(),
                row.students.to_string(),
            ]
        })
        .collect();

    render_table(
        "Instructor Summary",
        &["CWID", "Name", "Dept", "Course", "Students"],
        &cells,
    )
}

pub fn major_table(rows: &[MajorSummary]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.major.clone(),
                row.required.join(", "),
                row.electives.join(", "),
            ]
        })
        .collect();

    render_table(
        "Major Summary",
        &["Major", "Required Courses", "Electives"],
        &cells,
    )
}

/// All three summary tables in one serializable document, for consumers that
/// want the rows rather than rendered text.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub students: Vec<StudentSummary>,
    pub instructors: Vec<InstructorSummary>,
    pub majors: Vec<MajorSummary>,
}

impl JsonReport {
    pub fn from_repository(repository: &Repository) -> Self {
        Self {
            students: repository.student_summaries(),
            instructors: repository.instructor_summaries(),
            majors: repository.major_summaries(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

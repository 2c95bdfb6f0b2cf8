use crate::core::aggregate;
use crate::core::catalog::MajorCatalog;
use crate::core::reader::RecordReader;
use crate::core::store::EntityStore;
use crate::domain::model::{InstructorSummary, MajorSummary, StudentSummary};
use crate::domain::ports::SourceConfig;
use crate::utils::error::Result;
use std::path::Path;

const STUDENT_FIELDS: usize = 3;
const INSTRUCTOR_FIELDS: usize = 3;
const MAJOR_FIELDS: usize = 3;
const GRADE_FIELDS: usize = 4;

/// One batch worth of university records. Loads the four sources in a fixed
/// order and answers summary queries; any load error aborts the whole batch.
#[derive(Debug, Default)]
pub struct Repository {
    store: EntityStore,
    catalog: MajorCatalog,
}

impl Repository {
    pub fn load(config: &impl SourceConfig) -> Result<Self> {
        let mut repository = Self::default();
        let skip_headers = config.skip_headers();

        // Grades go last: they reference ids created by the first two steps.
        repository.load_students(config.students_path(), skip_headers)?;
        repository.load_instructors(config.instructors_path(), skip_headers)?;
        repository.load_majors(config.majors_path(), skip_headers)?;
        repository.load_grades(config.grades_path(), skip_headers)?;

        Ok(repository)
    }

    fn load_students(&mut self, path: &Path, skip_headers: bool) -> Result<()> {
        tracing::debug!("loading students from {}", path.display());
        for record in RecordReader::open(path, STUDENT_FIELDS, skip_headers)? {
            let fields = record?;
            self.store
                .upsert_student(&fields[0], &fields[1], &fields[2]);
        }
        tracing::info!("loaded {} students", self.store.student_count());
        Ok(())
    }

    fn load_instructors(&mut self, path: &Path, skip_headers: bool) -> Result<()> {
        tracing::debug!("loading instructors from {}", path.display());
        for record in RecordReader::open(path, INSTRUCTOR_FIELDS, skip_headers)? {
            let fields = record?;
            self.store
                .upsert_instructor(&fields[0], &fields[1], &fields[2]);
        }
        tracing::info!("loaded {} instructors", self.store.instructor_count());
        Ok(())
    }

    fn load_majors(&mut self, path: &Path, skip_headers: bool) -> Result<()> {
        tracing::debug!("loading majors from {}", path.display());
        for record in RecordReader::open(path, MAJOR_FIELDS, skip_headers)? {
            let fields = record?;
            let flag = fields[1].parse()?;
            self.catalog.add_course(&fields[0], flag, &fields[2]);
        }
        tracing::info!("loaded {} majors", self.catalog.len());
        Ok(())
    }

    fn load_grades(&mut self, path: &Path, skip_headers: bool) -> Result<()> {
        tracing::debug!("loading grades from {}", path.display());
        let mut count = 0usize;
        for record in RecordReader::open(path, GRADE_FIELDS, skip_headers)? {
            let fields = record?;
            self.store
                .record_grade(&fields[0], &fields[1], &fields[2], &fields[3])?;
            count += 1;
        }
        tracing::info!("applied {} grade records", count);
        Ok(())
    }

    /// Rows in cwid order, course lists sorted.
    pub fn student_summaries(&self) -> Vec<StudentSummary> {
        self.store
            .students()
            .map(|student| aggregate::summarize_student(student, &self.catalog))
            .collect()
    }

    /// One row per (instructor, course); consumers must not rely on row order.
    pub fn instructor_summaries(&self) -> Vec<InstructorSummary> {
        self.store
            .instructors()
            .flat_map(aggregate::summarize_instructor)
            .collect()
    }

    pub fn major_summaries(&self) -> Vec<MajorSummary> {
        aggregate::summarize_majors(&self.catalog)
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn catalog(&self) -> &MajorCatalog {
        &self.catalog
    }
}

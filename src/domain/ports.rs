use std::path::Path;

/// Where the four batch sources live and how their first lines are treated.
pub trait SourceConfig {
    fn students_path(&self) -> &Path;
    fn instructors_path(&self) -> &Path;
    fn grades_path(&self) -> &Path;
    fn majors_path(&self) -> &Path;
    fn skip_headers(&self) -> bool;
}

use crate::domain::ports::SourceConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_source_path, Validate};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "campus-records")]
#[command(about = "Load university records and report degree progress")]
pub struct CliConfig {
    #[arg(long, default_value = "students.txt")]
    pub students: PathBuf,

    #[arg(long, default_value = "instructors.txt")]
    pub instructors: PathBuf,

    #[arg(long, default_value = "grades.txt")]
    pub grades: PathBuf,

    #[arg(long, default_value = "majors.txt")]
    pub majors: PathBuf,

    #[arg(long, help = "Discard the first line of every source file")]
    pub skip_headers: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl SourceConfig for CliConfig {
    fn students_path(&self) -> &Path {
        &self.students
    }

    fn instructors_path(&self) -> &Path {
        &self.instructors
    }

    fn grades_path(&self) -> &Path {
        &self.grades
    }

    fn majors_path(&self) -> &Path {
        &self.majors
    }

    fn skip_headers(&self) -> bool {
        self.skip_headers
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_source_path("students", &self.students)?;
        validate_source_path("instructors", &self.instructors)?;
        validate_source_path("grades", &self.grades)?;
        validate_source_path("majors", &self.majors)?;
        Ok(())
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("cannot open source file {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} has {actual} fields on line {line} but {expected} expected", path.display())]
    MalformedRecord {
        path: PathBuf,
        /// 0-based index of the offending line in the source file.
        line: usize,
        actual: usize,
        expected: usize,
    },

    #[error("grade record references unknown student {cwid}")]
    UnknownStudent { cwid: String },

    #[error("grade record references unknown instructor {cwid}")]
    UnknownInstructor { cwid: String },

    #[error("unrecognized major flag '{flag}' (expected R or E)")]
    InvalidMajorFlag { flag: String },

    #[error("invalid configuration value for {field}: {reason}")]
    InvalidConfigValue { field: String, reason: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

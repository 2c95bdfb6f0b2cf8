pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

pub use config::{CliConfig, OutputFormat};
pub use core::catalog::MajorCatalog;
pub use core::pipeline::Repository;
pub use core::reader::RecordReader;
pub use core::store::EntityStore;
pub use utils::error::{RepositoryError, Result};

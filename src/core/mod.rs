pub mod aggregate;
pub mod catalog;
pub mod pipeline;
pub mod reader;
pub mod store;

pub use crate::domain::model::{InstructorSummary, MajorSummary, StudentSummary};
pub use crate::domain::ports::SourceConfig;
pub use crate::utils::error::Result;

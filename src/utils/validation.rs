use crate::utils::error::{RepositoryError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_source_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.as_os_str();

    if raw.is_empty() {
        return Err(RepositoryError::InvalidConfigValue {
            field: field_name.to_string(),
            reason: "path cannot be empty".to_string(),
        });
    }

    if raw.to_string_lossy().contains('\0') {
        return Err(RepositoryError::InvalidConfigValue {
            field: field_name.to_string(),
            reason: "path contains null bytes".to_string(),
        });
    }

    Ok(())
}

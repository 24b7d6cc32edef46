//! Subcommand implementations

pub(crate) mod convert;
pub(crate) mod inspect;

use crate::error::{CliError, Result};
use std::path::Path;

/// Check that `path` names an existing regular file.
pub(crate) fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

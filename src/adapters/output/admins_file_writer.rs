use std::path::{Path, PathBuf};

use error_stack::{report, ResultExt};
use thiserror::Error;
use tracing::instrument;

use crate::domain::admins_file::ADMINS_FILE_NAME;

#[derive(Error, Debug)]
pub enum AdminsFileWriteError {
    #[error("Output directory does not exist")]
    MissingDirectory,
    #[error("Failed to write admins file")]
    FailedToWrite,
}

/// Overwrites `<dir>/Admins.cfg` with `contents` and returns the written path.
#[instrument(skip(contents), fields(bytes = contents.len()))]
pub async fn write_admins_file(
    dir: &Path,
    contents: &str,
) -> error_stack::Result<PathBuf, AdminsFileWriteError> {
    let is_dir = tokio::fs::metadata(dir)
        .await
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return Err(report!(AdminsFileWriteError::MissingDirectory)
            .attach_printable(format!("directory: {}", dir.display())));
    }

    let path = dir.join(ADMINS_FILE_NAME);
    tokio::fs::write(&path, contents)
        .await
        .change_context(AdminsFileWriteError::FailedToWrite)
        .attach_printable_lazy(|| format!("path: {}", path.display()))?;

    Ok(path)
}

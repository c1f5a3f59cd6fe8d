// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

use crate::aggregate::AggregatedExport;
use crate::config::options::ExportOptions;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the aggregated export to `export.out_path()`. Returns the final path written to.
/// With no rows the file holds the header line only; with headers off as well there is
/// nothing to write and `ExportError::Empty` is returned.
pub fn write_export(
    export: &ExportOptions,
    data: &AggregatedExport,
) -> Result<PathBuf, ExportError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = data.to_delimited(export);
    if contents.is_empty() {
        return Err(ExportError::Empty);
    }

    fs::write(&path, contents).map_err(|source| ExportError::Io { path: path.clone(), source })?;
    info!(path = %path.display(), rows = data.row_count(), "export written");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

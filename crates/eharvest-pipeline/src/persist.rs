use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::PipelineError;

/// Writes `value` as 2-space indented UTF-8 JSON to `dir/file_name`.
///
/// Creates `dir` (and parents) if needed and overwrites any existing file, so
/// repeated runs over identical input produce byte-identical files.
///
/// # Errors
///
/// Returns [`PipelineError::Write`] if the directory or file cannot be
/// written, or [`PipelineError::Serialize`] if `value` cannot be serialized.
pub async fn write_json<T>(dir: &Path, file_name: &str, value: &T) -> Result<PathBuf, PipelineError>
where
    T: Serialize + ?Sized,
{
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| PipelineError::Write {
            path: dir.to_path_buf(),
            source: e,
        })?;

    let path = dir.join(file_name);
    let bytes = serde_json::to_vec_pretty(value).map_err(|e| PipelineError::Serialize {
        path: path.clone(),
        source: e,
    })?;

    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| PipelineError::Write {
            path: path.clone(),
            source: e,
        })?;

    tracing::info!(path = %path.display(), "saved");
    Ok(path)
}

//! Locating the project under test.

use crate::error::{Error, Result};
use std::path::Path;

/// Determine which project to build.
///
/// A filter is used as the project identifier as-is. Without one, `dir` must
/// contain exactly one `*.{extension}` file.
pub fn resolve_project(dir: &Path, filter: Option<&str>, extension: &str) -> Result<String> {
    if let Some(name) = filter {
        return Ok(name.to_string());
    }

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file()
            && path.extension().is_some_and(|ext| ext == extension)
            && let Some(name) = path.file_name()
        {
            candidates.push(name.to_string_lossy().into_owned());
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(Error::ProjectNotFound {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(Error::AmbiguousProject {
            dir: dir.to_path_buf(),
            candidates,
        }),
    }
}

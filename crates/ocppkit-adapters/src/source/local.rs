//! Local filesystem source using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use ocppkit_core::{
    application::{ApplicationError, ports::DocumentSource},
    error::{OcppkitError, OcppkitResult},
};

/// Production source: reads documents from disk.
///
/// Built from the paths given on the command line. A file is served as-is;
/// a directory contributes every `*.json` file beneath it.
#[derive(Debug, Clone, Default)]
pub struct LocalSource {
    roots: Vec<PathBuf>,
}

impl LocalSource {
    /// Create a source over the given files and directories.
    pub fn new(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }
}

impl DocumentSource for LocalSource {
    fn read(&self, location: &str) -> OcppkitResult<String> {
        let path = Path::new(location);
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e))
    }

    fn list(&self) -> OcppkitResult<Vec<String>> {
        let mut locations = Vec::new();
        for root in &self.roots {
            if root.is_dir() {
                locations.extend(discover(root)?);
            } else if root.exists() {
                locations.push(root.clone());
            } else {
                return Err(map_io_error(root, io::Error::from(io::ErrorKind::NotFound)));
            }
        }

        Ok(locations
            .into_iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect())
    }
}

/// Every `*.json` file under `dir`, sorted by path.
#[instrument(skip(dir), fields(dir = %dir.display()))]
pub fn discover(dir: &Path) -> OcppkitResult<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            OcppkitError::from(ApplicationError::SourceUnavailable {
                location: path.display().to_string(),
                reason: format!("directory walk error: {e}"),
            })
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == "json") {
            found.push(entry.into_path());
        } else {
            debug!(path = %entry.path().display(), "Skipping non-JSON file");
        }
    }

    if found.is_empty() {
        warn!("No JSON documents found");
    }
    Ok(found)
}

fn map_io_error(path: &Path, e: io::Error) -> OcppkitError {
    ApplicationError::SourceUnavailable {
        location: path.display().to_string(),
        reason: e.to_string(),
    }
    .into()
}

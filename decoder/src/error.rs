use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A generation run failed while producing one artifact. Nothing written
/// for that artifact should be trusted.
#[derive(Debug)]
pub struct GenerateError {
    path: PathBuf,
    source: io::Error,
}

impl GenerateError {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to write {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

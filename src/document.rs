//! Loading and persisting documents

use crate::error::{StripError, StripResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// How a document is written back to its path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and write in place.
    ///
    /// A failure part-way through can leave the file truncated or empty.
    #[default]
    Overwrite,

    /// Write a temp file in the same directory, then rename it over the target.
    Atomic,
}

/// Full text content of one file, kept as opaque characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read the whole file at `path`, which must be UTF-8
    pub fn load(path: impl AsRef<Path>) -> StripResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| StripError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| StripError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded document");
        Ok(Self::new(path, text))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the content, keeping the path
    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Write the content back to the document's path
    pub fn persist(&self, mode: WriteMode) -> StripResult<()> {
        let result = match mode {
            WriteMode::Overwrite => fs::write(&self.path, self.text.as_bytes()),
            WriteMode::Atomic => self.persist_atomic(),
        };
        result.map_err(|source| StripError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = self.text.len(), ?mode, "persisted document");
        Ok(())
    }

    fn persist_atomic(&self) -> std::io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(self.text.as_bytes())?;
        tmp.as_file().sync_all()?;

        // Keep the original permissions on the replacement file
        if let Ok(meta) = fs::metadata(&self.path) {
            if let Err(e) = fs::set_permissions(tmp.path(), meta.permissions()) {
                warn!(path = %self.path.display(), error = %e, "could not copy permissions");
            }
        }

        tmp.persist(&self.path).map_err(|e| {
            if let Err(cleanup) = e.file.close() {
                warn!(error = %cleanup, "could not remove temp file");
            }
            e.error
        })?;
        Ok(())
    }
}

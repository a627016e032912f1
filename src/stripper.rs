//! The field stripper: load, strip, write back

use crate::document::{Document, WriteMode};
use crate::error::StripResult;
use crate::pattern::{FieldPattern, Stripped};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of stripping one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StripReport {
    pub path: PathBuf,
    pub field: String,
    /// Number of occurrences deleted
    pub removed: usize,
    pub bytes_before: usize,
    pub bytes_after: usize,
    /// False only for dry runs
    pub written: bool,
}

/// Removes every occurrence of one field from documents
///
/// Defaults to the `source` field, in-place overwrite, and always writing
/// the result back (even when nothing matched).
#[derive(Debug, Clone, Default)]
pub struct FieldStripper {
    pattern: FieldPattern,
    write_mode: WriteMode,
    dry_run: bool,
}

impl FieldStripper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: &str) -> StripResult<Self> {
        self.pattern = FieldPattern::new(field)?;
        Ok(self)
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    /// Report what would be removed without touching the file
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn field(&self) -> &str {
        self.pattern.field()
    }

    pub fn pattern(&self) -> &FieldPattern {
        &self.pattern
    }

    /// Transform text in memory
    pub fn strip_str<'t>(&self, text: &'t str) -> Stripped<'t> {
        self.pattern.strip(text)
    }

    /// Strip the file at `path` and write the result back to the same path
    pub fn strip(&self, path: impl AsRef<Path>) -> StripResult<StripReport> {
        let mut doc = Document::load(path)?;
        let bytes_before = doc.len();

        let stripped = self.pattern.strip(doc.text());
        let removed = stripped.removed;
        let text = stripped.text.into_owned();
        doc.set_text(text);

        if !self.dry_run {
            doc.persist(self.write_mode)?;
        }

        let report = StripReport {
            path: doc.path().to_path_buf(),
            field: self.field().to_string(),
            removed,
            bytes_before,
            bytes_after: doc.len(),
            written: !self.dry_run,
        };
        info!(
            path = %report.path.display(),
            field = %report.field,
            removed = report.removed,
            written = report.written,
            "stripped document"
        );
        Ok(report)
    }
}

/// Strip every `"source"` field from the file at `path`, overwriting it in place
pub fn strip(path: impl AsRef<Path>) -> StripResult<StripReport> {
    FieldStripper::new().strip(path)
}

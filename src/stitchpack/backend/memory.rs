use super::PatternBackend;
use crate::error::{Result, StitchpackError};
use crate::model::Pattern;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory backend for testing and development.
/// Does NOT touch the filesystem.
#[derive(Default)]
pub struct InMemoryBackend {
    patterns: HashMap<PathBuf, Pattern>,
    versions: HashMap<PathBuf, String>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pattern as if an embroidery file existed at `path`.
    pub fn with_pattern(mut self, path: impl Into<PathBuf>, pattern: Pattern) -> Self {
        self.patterns.insert(path.into(), pattern);
        self
    }

    pub fn pattern(&self, path: &Path) -> Option<&Pattern> {
        self.patterns.get(path)
    }

    /// Format version used for the last save to `path`.
    pub fn saved_version(&self, path: &Path) -> Option<&str> {
        self.versions.get(path).map(String::as_str)
    }
}

impl PatternBackend for InMemoryBackend {
    fn load_pattern(&self, path: &Path) -> Result<Pattern> {
        self.patterns
            .get(path)
            .cloned()
            .ok_or_else(|| StitchpackError::FileNotFound(path.to_path_buf()))
    }

    fn save_pattern(
        &mut self,
        pattern: &Pattern,
        path: &Path,
        format_version: &str,
    ) -> Result<()> {
        self.patterns.insert(path.to_path_buf(), pattern.clone());
        self.versions
            .insert(path.to_path_buf(), format_version.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Stitch, Thread};

    /// A small two-color design: a jump, a run of stitches, a color change,
    /// more stitches and an end.
    pub fn two_color_pattern() -> Pattern {
        Pattern::new(
            vec![
                Stitch::new(0, 0, 1),
                Stitch::new(10, 0, 0),
                Stitch::new(10, 10, 0),
                Stitch::new(10, 10, 5),
                Stitch::new(0, 10, 0),
                Stitch::new(0, 0, 0),
                Stitch::new(0, 0, 4),
            ],
            vec![
                Thread {
                    hex_color: Some("#ff0000".into()),
                    description: Some("Poppy".into()),
                    brand: Some("Acme".into()),
                    weight: Some(40.0),
                    ..Default::default()
                },
                Thread::with_color("#0000ff"),
            ],
        )
    }
}

use super::PatternBackend;
use crate::codec;
use crate::error::{Result, StitchpackError};
use crate::model::Pattern;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

const LOAD_SCRIPT: &str = include_str!("scripts/load_pattern.py");
const SAVE_SCRIPT: &str = include_str!("scripts/save_pattern.py");

/// Exit status the scripts use when `import pyembroidery` fails.
const EXIT_MISSING_LIBRARY: i32 = 2;

const SCRATCH_NAME: &str = "pattern.stp";

/// Backend that drives pyembroidery in a child Python interpreter.
///
/// Every call gets its own temporary directory holding a scratch container;
/// the child either writes it (load) or reads it (save). The temporary
/// directory is removed when the call returns.
#[derive(Debug, Clone)]
pub struct PyEmbroideryBackend {
    python: PathBuf,
    python_args: Vec<String>,
}

impl PyEmbroideryBackend {
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
            python_args: Vec::new(),
        }
    }

    /// Arguments placed before `-c <script>`, e.g. `["run", "python"]` when
    /// the interpreter is launched through a wrapper.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.python_args = args.into_iter().map(Into::into).collect();
        self
    }

    fn scratch_dir(&self) -> Result<tempfile::TempDir> {
        Ok(tempfile::Builder::new().prefix("stitchpack-").tempdir()?)
    }

    fn run_script(&self, script: &str, args: &[&OsStr]) -> Result<()> {
        tracing::debug!(python = %self.python.display(), ?args, "running pyembroidery");

        let output = Command::new(&self.python)
            .args(&self.python_args)
            .arg("-c")
            .arg(script)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => StitchpackError::Backend(format!(
                    "python interpreter not found: {}",
                    self.python.display()
                )),
                _ => StitchpackError::Backend(format!(
                    "failed to run {}: {}",
                    self.python.display(),
                    e
                )),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = stderr.lines().rev().find(|l| !l.trim().is_empty());
        match output.status.code() {
            Some(EXIT_MISSING_LIBRARY) => Err(StitchpackError::Backend(format!(
                "pyembroidery is not installed for {}",
                self.python.display()
            ))),
            code => Err(StitchpackError::UnsupportedPattern(match (reason, code) {
                (Some(reason), _) => reason.trim().to_string(),
                (None, Some(code)) => format!("embroidery library exited with status {}", code),
                (None, None) => "embroidery library was terminated".to_string(),
            })),
        }
    }
}

impl PatternBackend for PyEmbroideryBackend {
    fn load_pattern(&self, path: &Path) -> Result<Pattern> {
        if !path.is_file() {
            return Err(StitchpackError::FileNotFound(path.to_path_buf()));
        }

        let scratch = self.scratch_dir()?;
        let container = scratch.path().join(SCRATCH_NAME);
        self.run_script(LOAD_SCRIPT, &[path.as_os_str(), container.as_os_str()])?;

        if !container.is_file() {
            return Err(StitchpackError::Backend(
                "embroidery library produced no output".to_string(),
            ));
        }
        codec::read_file(&container)
    }

    fn save_pattern(
        &mut self,
        pattern: &Pattern,
        path: &Path,
        format_version: &str,
    ) -> Result<()> {
        let scratch = self.scratch_dir()?;
        let container = scratch.path().join(SCRATCH_NAME);
        codec::write_file(&container, pattern)?;
        self.run_script(
            SAVE_SCRIPT,
            &[
                container.as_os_str(),
                path.as_os_str(),
                OsStr::new(format_version),
            ],
        )
    }
}

//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for stitchpack operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Fills in defaults** (e.g., the configured format version on import)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not print, format, or decide exit codes. That is the CLI's job.
//!
//! ## Generic Over PatternBackend
//!
//! `StitchpackApi<B: PatternBackend>` is generic over the embroidery backend:
//! - Production: `StitchpackApi<PyEmbroideryBackend>`
//! - Testing: `StitchpackApi<InMemoryBackend>`
//!
//! API tests check dispatch and argument handling only. Codec and command
//! behavior is tested in their own modules.

use crate::backend::PatternBackend;
use crate::commands;
use crate::config::StitchpackConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, CommandCount, MessageLevel, PatternSummary};

/// The main API facade for stitchpack operations.
pub struct StitchpackApi<B: PatternBackend> {
    backend: B,
    config: StitchpackConfig,
    config_dir: PathBuf,
}

impl<B: PatternBackend> StitchpackApi<B> {
    pub fn new(backend: B, config: StitchpackConfig, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            config,
            config_dir: config_dir.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read an embroidery file through the backend and write it as a container.
    pub fn export_pattern(&self, input: &Path, output: &Path) -> Result<CmdResult> {
        commands::export::run(&self.backend, input, output)
    }

    /// Read a container and hand it to the backend to write as an embroidery file.
    ///
    /// `format_version` falls back to the configured one when `None`.
    pub fn import_pattern(
        &mut self,
        input: &Path,
        output: &Path,
        format_version: Option<&str>,
    ) -> Result<CmdResult> {
        let version = format_version
            .map(str::to_string)
            .unwrap_or_else(|| self.config.format_version.clone());
        commands::import::run(&mut self.backend, input, output, &version)
    }

    pub fn inspect_container(&self, path: &Path) -> Result<CmdResult> {
        commands::inspect::run(path)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

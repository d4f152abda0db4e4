//! # Pattern Backends
//!
//! Reading and writing real embroidery formats (DST, PES, EXP, ...) is not
//! done here. It is delegated to an embroidery library behind the
//! [`PatternBackend`] trait, which exposes exactly two capabilities:
//!
//! - `load_pattern(path)`: embroidery file → stitches + threads
//! - `save_pattern(pattern, path, format_version)`: stitches + threads →
//!   embroidery file
//!
//! ## Implementations
//!
//! - [`pyembroidery::PyEmbroideryBackend`]: production backend. Runs the
//!   pyembroidery Python library in a child interpreter and exchanges data
//!   with it through scratch container files.
//! - [`memory::InMemoryBackend`]: patterns kept in a map, for testing the
//!   command and API layers without Python.

use crate::error::Result;
use crate::model::Pattern;
use std::path::Path;

pub mod memory;
pub mod pyembroidery;

/// Abstract interface to an embroidery-format library.
///
/// Any failure aborts the operation; implementations do not retry and do not
/// return partial patterns.
pub trait PatternBackend {
    /// Read the embroidery file at `path`.
    fn load_pattern(&self, path: &Path) -> Result<Pattern>;

    /// Write `pattern` to `path`, in whatever format the library infers from
    /// the path, using the given format version option.
    fn save_pattern(&mut self, pattern: &Pattern, path: &Path, format_version: &str)
    -> Result<()>;
}

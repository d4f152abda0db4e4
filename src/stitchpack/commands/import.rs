use crate::backend::PatternBackend;
use crate::codec;
use crate::commands::{CmdMessage, CmdResult, count_label};
use crate::error::Result;
use std::path::Path;

/// Container → embroidery file, written with `format_version`.
pub fn run<B: PatternBackend>(
    backend: &mut B,
    input: &Path,
    output: &Path,
    format_version: &str,
) -> Result<CmdResult> {
    let pattern = codec::read_file(input)?;
    backend.save_pattern(&pattern, output, format_version)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        format_version,
        stitches = pattern.stitches.len(),
        threads = pattern.threads.len(),
        "imported pattern"
    );

    let mut result = CmdResult::default().with_written_path(output);
    result.add_message(CmdMessage::success(format!(
        "Wrote {} ({}, {}, format version {})",
        output.display(),
        count_label(pattern.stitches.len(), "stitch", "stitches"),
        count_label(pattern.threads.len(), "thread", "threads"),
        format_version
    )));
    Ok(result)
}

use crate::backend::PatternBackend;
use crate::codec;
use crate::commands::{CmdMessage, CmdResult, count_label};
use crate::error::Result;
use std::path::Path;

/// Embroidery file → container.
pub fn run<B: PatternBackend>(backend: &B, input: &Path, output: &Path) -> Result<CmdResult> {
    // 1. Let the embroidery library parse the design
    let pattern = backend.load_pattern(input)?;

    // 2. Frame it and write it out in one go
    let bytes = codec::write_file(output, &pattern)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        stitches = pattern.stitches.len(),
        threads = pattern.threads.len(),
        bytes,
        "exported pattern"
    );

    let mut result = CmdResult::default().with_written_path(output);
    result.add_message(CmdMessage::success(format!(
        "Exported {} ({}, {})",
        output.display(),
        count_label(pattern.stitches.len(), "stitch", "stitches"),
        count_label(pattern.threads.len(), "thread", "threads"),
    )));
    if pattern.stitches.is_empty() {
        result.add_message(CmdMessage::warning("Pattern has no stitches."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::InMemoryBackend;
    use crate::backend::memory::fixtures::two_color_pattern;
    use crate::commands::MessageLevel;
    use crate::error::StitchpackError;
    use crate::model::Pattern;

    #[test]
    fn test_export_writes_container() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("rose.stp");
        let backend = InMemoryBackend::new().with_pattern("rose.pes", two_color_pattern());

        let result = run(&backend, Path::new("rose.pes"), &output).unwrap();

        assert_eq!(codec::read_file(&output).unwrap(), two_color_pattern());
        assert_eq!(result.written_paths, vec![output.clone()]);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("7 stitches, 2 threads"));
    }

    #[test]
    fn test_export_empty_pattern_warns() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("empty.stp");
        let backend = InMemoryBackend::new().with_pattern("empty.dst", Pattern::default());

        let result = run(&backend, Path::new("empty.dst"), &output).unwrap();

        assert_eq!(std::fs::read(&output).unwrap().len(), 10);
        assert!(
            result
                .messages
                .iter()
                .any(|m| m.level == MessageLevel::Warning)
        );
    }

    #[test]
    fn test_export_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.stp");
        let backend = InMemoryBackend::new();

        let err = run(&backend, Path::new("missing.pes"), &output).unwrap_err();

        assert!(matches!(err, StitchpackError::FileNotFound(_)));
        assert!(!output.exists());
    }
}

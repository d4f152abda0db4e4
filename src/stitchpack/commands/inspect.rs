use crate::codec;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Bounds, Pattern, Thread};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// What a container holds, without the stitch data itself.
#[derive(Debug, Clone, Serialize)]
pub struct PatternSummary {
    pub path: PathBuf,
    pub byte_len: u64,
    pub stitch_count: usize,
    pub thread_count: usize,
    pub bounds: Option<Bounds>,
    pub commands: Vec<CommandCount>,
    pub threads: Vec<Thread>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandCount {
    pub command: String,
    pub count: usize,
}

impl PatternSummary {
    pub fn from_pattern(path: &Path, byte_len: u64, pattern: Pattern) -> Self {
        let commands = pattern
            .command_histogram()
            .into_iter()
            .map(|(command, count)| CommandCount {
                command: command
                    .map(|c| c.name().to_string())
                    .unwrap_or_else(|| "other".to_string()),
                count,
            })
            .collect();

        Self {
            path: path.to_path_buf(),
            byte_len,
            stitch_count: pattern.stitches.len(),
            thread_count: pattern.threads.len(),
            bounds: pattern.bounds(),
            commands,
            threads: pattern.threads,
        }
    }
}

pub fn run(path: &Path) -> Result<CmdResult> {
    let pattern = codec::read_file(path)?;
    let byte_len = fs::metadata(path)?.len();
    Ok(CmdResult::default().with_summary(PatternSummary::from_pattern(path, byte_len, pattern)))
}

use crate::config::StitchpackConfig;
use std::path::PathBuf;

pub mod config;
pub mod export;
pub mod import;
pub mod inspect;

pub use inspect::{CommandCount, PatternSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub written_paths: Vec<PathBuf>,
    pub summary: Option<PatternSummary>,
    pub config: Option<StitchpackConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_written_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.written_paths.push(path.into());
        self
    }

    pub fn with_summary(mut self, summary: PatternSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_config(mut self, config: StitchpackConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// "1 stitch", "3 stitches"
pub(crate) fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

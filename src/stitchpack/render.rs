use colored::Colorize;
use stitchpack::api::{CmdMessage, MessageLevel, PatternSummary};
use stitchpack::error::Result;
use stitchpack::model::Thread;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const LABEL_WIDTH: usize = 14;
const SWATCH: &str = "  ";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_summary(summary: &PatternSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{}", render_summary(summary));
    }
    Ok(())
}

pub fn render_summary(summary: &PatternSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        summary.path.display().to_string().bold(),
        format!("({} bytes)", summary.byte_len).dimmed()
    ));
    out.push_str(&field_line("stitches", &summary.stitch_count.to_string()));
    out.push_str(&field_line("threads", &summary.thread_count.to_string()));
    match &summary.bounds {
        Some(b) => out.push_str(&field_line(
            "bounds",
            &format!(
                "({}, {}) to ({}, {}), {} x {}",
                b.min_x,
                b.min_y,
                b.max_x,
                b.max_y,
                b.width(),
                b.height()
            ),
        )),
        None => out.push_str(&field_line("bounds", "empty")),
    }

    if !summary.commands.is_empty() {
        out.push_str(&format!("\n{}\n", "Commands".yellow()));
        for entry in &summary.commands {
            out.push_str(&field_line(&entry.command, &entry.count.to_string()));
        }
    }

    if !summary.threads.is_empty() {
        out.push_str(&format!("\n{}\n", "Threads".yellow()));
        let index_width = summary.threads.len().to_string().len();
        for (i, thread) in summary.threads.iter().enumerate() {
            out.push_str(&thread_line(i + 1, index_width, thread));
        }
    }

    out
}

fn field_line(label: &str, value: &str) -> String {
    let pad = LABEL_WIDTH.saturating_sub(label.width());
    format!("  {}{}{}\n", label, " ".repeat(pad), value)
}

fn thread_line(index: usize, index_width: usize, thread: &Thread) -> String {
    let swatch = match thread.rgb() {
        Some(c) => SWATCH.on_truecolor(c.r, c.g, c.b).to_string(),
        None => SWATCH.to_string(),
    };
    let hex = thread.hex_color.as_deref().unwrap_or("-");

    let mut details: Vec<String> = Vec::new();
    if let Some(d) = &thread.description {
        details.push(d.clone());
    }
    if let Some(b) = &thread.brand {
        details.push(b.clone());
    }
    if let Some(c) = &thread.catalog_number {
        details.push(format!("#{}", c));
    }
    if let Some(w) = thread.weight {
        details.push(format!("wt {}", w));
    }

    // "  NN. [swatch] #rrggbb  "
    let prefix_width = 2 + index_width + 2 + SWATCH.width() + 1 + hex.width() + 2;
    let available = LINE_WIDTH.saturating_sub(prefix_width);
    let details = truncate_to_width(&details.join(", "), available);

    format!(
        "  {:>width$}. {} {}  {}\n",
        index,
        swatch,
        hex,
        details.dimmed(),
        width = index_width
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use stitchpack::model::{Pattern, Stitch};

    fn rose() -> Pattern {
        let mut red = Thread::with_color("#ff0000");
        red.description = Some("Poppy".into());
        Pattern::new(
            vec![
                Stitch::new(0, 0, 0),
                Stitch::new(10, 10, 5),
                Stitch::new(10, 0, 0),
            ],
            vec![red, Thread::with_color("#0000ff")],
        )
    }

    #[test]
    fn test_render_summary_lists_counts_and_threads() {
        let summary = PatternSummary::from_pattern(Path::new("rose.stp"), 100, rose());
        let output = render_summary(&summary);

        assert!(output.contains("rose.stp"));
        assert!(output.contains("stitches"));
        assert!(output.contains("color-change"));
        assert!(output.contains("#ff0000"));
        assert!(output.contains("Poppy"));
        assert!(output.contains("#0000ff"));
    }

    #[test]
    fn test_render_empty_pattern() {
        let summary = PatternSummary::from_pattern(Path::new("empty.stp"), 8, Pattern::default());
        let output = render_summary(&summary);

        assert!(output.contains("empty"));
        assert!(!output.contains("Commands"));
        assert!(!output.contains("Threads"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Poppy", 10), "Poppy");
        assert_eq!(truncate_to_width("Poppy Red Rayon", 6), "Poppy…");
        // wide chars count double
        assert_eq!(truncate_to_width("刺繍刺繍", 5), "刺繍…");
    }
}

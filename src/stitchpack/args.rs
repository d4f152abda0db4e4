use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "stitchpack", bin_name = "stitchpack", version = get_version())]
#[command(
    about = "Convert embroidery files to and from a compact stitch container",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json (defaults to STITCHPACK_HOME, then the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read an embroidery file and write it as a container
    #[command(alias = "x")]
    Export {
        /// Embroidery file to read (any format the library understands)
        input: PathBuf,

        /// Container file to write
        output: PathBuf,
    },

    /// Read a container and write it as an embroidery file
    #[command(alias = "i")]
    Import {
        /// Container file to read
        input: PathBuf,

        /// Embroidery file to write; the extension picks the format
        output: PathBuf,

        /// Format version passed to the writer (defaults to the configured one)
        #[arg(long, value_name = "VERSION")]
        format_version: Option<String>,
    },

    /// Summarize a container without converting it
    Inspect {
        /// Container file to read
        path: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (python, python-args, format-version)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_import_with_version() {
        let cli = Cli::try_parse_from([
            "stitchpack",
            "import",
            "rose.stp",
            "rose.pes",
            "--format-version",
            "6t",
        ])
        .unwrap();

        match cli.command {
            Commands::Import {
                input,
                output,
                format_version,
            } => {
                assert_eq!(input, PathBuf::from("rose.stp"));
                assert_eq!(output, PathBuf::from("rose.pes"));
                assert_eq!(format_version.as_deref(), Some("6t"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "stitchpack",
            "inspect",
            "rose.stp",
            "--json",
            "-v",
            "--config-dir",
            "/tmp/sp",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/sp")));
        assert!(matches!(cli.command, Commands::Inspect { json: true, .. }));
    }

    #[test]
    fn test_export_needs_both_paths() {
        assert!(Cli::try_parse_from(["stitchpack", "export", "rose.pes"]).is_err());
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
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
#[command(name = "shipmate", bin_name = "shipmate", version = get_version())]
#[command(about = "Release-preparation helper for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print unchecked items from the production checklist
    #[command(alias = "ck")]
    Checklist {
        /// Markdown document to scan (defaults to the configured path)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Phrase identifying the heading of the target section
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Dump the credentials spreadsheet via the external converter
    #[command(alias = "creds")]
    Credentials {
        /// Spreadsheet to convert (defaults to the configured path)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Converter program to invoke (defaults to the configured command)
        #[arg(short, long)]
        converter: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., checklist-path)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

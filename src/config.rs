/*!
 * Configuration handling for treedump
 */

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::ensure;
use crate::error::Result;

/// Default name of the output document, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "all.txt";

/// What to do when an input file cannot be opened or read as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReadFailurePolicy {
    /// Leave the file out, log a warning and keep going (default)
    Skip,
    /// Stop the run on the first failure, keeping what was already written
    Abort,
}

impl Default for ReadFailurePolicy {
    fn default() -> Self {
        Self::Skip
    }
}

/// Command-line arguments for treedump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "treedump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate every text file under a directory into one document",
    long_about = "Walks a directory tree and writes the content of every file, prefixed by its path, into a single text document."
)]
pub struct Args {
    /// Root directory to scan
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output file name
    #[clap(default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Include entries whose name starts with a dot
    #[clap(long)]
    pub hidden: bool,

    /// Comma-separated list of directory name patterns to skip
    #[clap(long, value_delimiter = ',')]
    pub exclude_dir: Vec<String>,

    /// Also skip common VCS, dependency and build directories
    #[clap(long)]
    pub default_excludes: bool,

    /// Policy for files that cannot be read
    #[clap(long, value_enum, default_value_t = ReadFailurePolicy::default())]
    pub on_read_error: ReadFailurePolicy,

    /// Do not show progress or the final report
    #[clap(long, short)]
    pub quiet: bool,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to scan
    pub root: PathBuf,

    /// Output document path
    pub output_file: PathBuf,

    /// Whether dot-entries are enumerated
    pub include_hidden: bool,

    /// Glob patterns for directory names that are not descended into
    pub exclude_dirs: Vec<String>,

    /// Policy for unreadable input files
    pub read_failure_policy: ReadFailurePolicy,
}

impl Default for Config {
    /// Scan the working directory into `all.txt`, skipping hidden entries
    /// and unreadable files.
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            include_hidden: false,
            exclude_dirs: Vec::new(),
            read_failure_policy: ReadFailurePolicy::default(),
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let mut exclude_dirs = args.exclude_dir;
        if args.default_excludes {
            exclude_dirs.extend(
                crate::utils::DEFAULT_EXCLUDE_DIRS
                    .iter()
                    .map(|p| p.to_string()),
            );
        }

        Self {
            root: PathBuf::from(args.directory_path),
            output_file: PathBuf::from(args.output_file),
            include_hidden: args.hidden,
            exclude_dirs,
            read_failure_policy: args.on_read_error,
        }
    }

    /// Create a configuration for `root` with every other field defaulted
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// Runs before anything touches the output document.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.output_file.as_os_str().is_empty(),
            Config,
            "Output file path is empty"
        );

        // Check if output file directory exists
        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent == Path::new("") || parent.is_dir(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        ensure!(
            !self.output_file.is_dir(),
            Config,
            "Output path is a directory: {}",
            self.output_file.display()
        );

        Ok(())
    }
}

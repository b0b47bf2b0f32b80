/*!
 * Output document writer
 */

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

use indicatif::ProgressBar;
use tracing::{debug, warn};

use crate::config::{Config, ReadFailurePolicy};
use crate::error::{DumpError, Result};
use crate::types::{Entry, EntryKind, FileList, FileStats, WriteSummary};

/// Prefix of the header line that starts every block
pub const HEADER_PREFIX: &str = "content of file: ";

/// Fence around embedded content
pub const FENCE: &str = "```";

/// Render the block for one file.
///
/// Content is embedded verbatim, fences inside it are not escaped.
pub fn format_block(path: &str, content: &str) -> String {
    format!("{HEADER_PREFIX}{path}\n\n{FENCE}\n{content}\n{FENCE}\n")
}

/// Writes the output document from a file list
pub struct BlockWriter {
    /// Writer configuration
    config: Config,
    /// Progress bar, ticked once per entry
    progress: ProgressBar,
}

impl BlockWriter {
    /// Create a new writer with a hidden progress bar
    pub fn new(config: Config) -> Self {
        Self {
            config,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report progress on the given bar
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Truncate the output document and write one block per non-directory
    /// entry, in list order.
    ///
    /// The output handle is flushed and closed on every exit path, so an
    /// aborted run leaves the blocks written so far on disk.
    pub fn write(&self, files: &FileList) -> Result<WriteSummary> {
        let path = &self.config.output_file;
        let file = File::create(path).map_err(|source| DumpError::OutputCreate {
            path: path.clone(),
            source,
        })?;
        let mut out = BufWriter::new(file);

        let result = self.write_blocks(files, &mut out);
        let flushed = out.flush().map_err(|source| DumpError::Write {
            path: path.clone(),
            source,
        });

        let summary = result?;
        flushed?;
        Ok(summary)
    }

    fn write_blocks<W: Write>(&self, files: &FileList, out: &mut W) -> Result<WriteSummary> {
        let mut summary = WriteSummary::default();

        for entry in files {
            self.progress.inc(1);

            if entry.is_dir() {
                summary.directories_skipped += 1;
                continue;
            }

            self.progress.set_message(display_name(entry));

            let content = match read_entry(entry) {
                Ok(content) => content,
                Err(source) => match self.config.read_failure_policy {
                    ReadFailurePolicy::Skip => {
                        warn!(path = %entry.display, error = %source, "skipping unreadable file");
                        summary.record_skip(&entry.path, &source);
                        continue;
                    }
                    ReadFailurePolicy::Abort => {
                        return Err(DumpError::Read {
                            path: entry.path.clone(),
                            source,
                        });
                    }
                },
            };

            out.write_all(format_block(&entry.display, &content).as_bytes())
                .map_err(|source| DumpError::Write {
                    path: self.config.output_file.clone(),
                    source,
                })?;

            debug!(path = %entry.display, bytes = content.len(), "wrote block");

            summary.blocks_written += 1;
            summary.content_bytes += content.len() as u64;
            summary.file_details.push((
                entry.display.clone(),
                FileStats {
                    lines: content.lines().count(),
                    chars: content.chars().count(),
                },
            ));
        }

        Ok(summary)
    }
}

/// Read an entry as UTF-8 text. Sockets, fifos and devices are never
/// opened, whether listed directly or reached through a symlink.
fn read_entry(entry: &Entry) -> io::Result<String> {
    match entry.kind {
        EntryKind::File => {}
        EntryKind::Symlink => {
            if !fs::metadata(&entry.path)?.is_file() {
                return Err(not_regular_file());
            }
        }
        EntryKind::Directory | EntryKind::Other => return Err(not_regular_file()),
    }
    fs::read_to_string(&entry.path)
}

fn not_regular_file() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, "not a regular file")
}

/// File name for the progress message, truncated to keep the bar on one line
fn display_name(entry: &Entry) -> String {
    let file_name = entry
        .path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let count = file_name.chars().count();
    if count > 40 {
        let tail: String = file_name.chars().skip(count - 37).collect();
        format!("...{}", tail)
    } else {
        file_name
    }
}

/*!
 * treedump - Concatenate the files of a directory tree into one document
 *
 * The scanner enumerates every entry under a root, sorted by path, and the
 * writer renders one fenced block per file into a single output document.
 */

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Config, ReadFailurePolicy};
pub use error::{DumpError, Result};
pub use report::{Reporter, RunReport};
pub use scanner::{ScanObserver, Scanner, TracingObserver};
pub use types::{Entry, EntryKind, FileList, WriteSummary};
pub use writer::{format_block, BlockWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Enumerate `config.root` and write the output document in one pass
pub fn run(config: &Config) -> Result<(FileList, WriteSummary)> {
    let files = Scanner::new(config.clone())
        .with_observer(TracingObserver)
        .scan()?;
    let summary = BlockWriter::new(config.clone()).write(&files)?;
    Ok((files, summary))
}

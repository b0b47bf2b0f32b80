/*!
 * Core types and data structures for treedump
 */

use std::path::{Path, PathBuf};

/// Kind of a filesystem entry as seen by the walker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Symbolic link, not followed during the walk
    Symlink,
    /// Anything else (sockets, fifos, devices)
    Other,
}

impl From<std::fs::FileType> for EntryKind {
    fn from(file_type: std::fs::FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// A filesystem entry discovered under the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path of the entry: the root joined with its relative path
    pub path: PathBuf,
    /// String form of `path`, used for sorting and block headers
    pub display: String,
    /// Entry kind
    pub kind: EntryKind,
}

impl Entry {
    /// Create an entry
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        let path = path.into();
        let display = path.to_string_lossy().into_owned();
        Self {
            path,
            display,
            kind,
        }
    }

    /// Whether the aggregator should skip this entry as a directory.
    ///
    /// Symlinks count as directories when their target is one.
    pub fn is_dir(&self) -> bool {
        match self.kind {
            EntryKind::Directory => true,
            EntryKind::Symlink => self.path.is_dir(),
            EntryKind::File | EntryKind::Other => false,
        }
    }
}

/// Entries sorted ascending by their path string.
///
/// Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    entries: Vec<Entry>,
}

impl FileList {
    /// Build a list from entries in any order
    pub fn new(mut entries: Vec<Entry>) -> Self {
        // Distinct non-UTF-8 names can share a lossy display string
        entries.sort_by(|a, b| {
            a.display
                .cmp(&b.display)
                .then_with(|| a.path.as_os_str().cmp(b.path.as_os_str()))
        });
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path strings in list order
    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.display.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A file left out of the output document and why
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Per-file statistics collected while writing
#[derive(Debug, Clone, Default)]
pub struct FileStats {
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
}

/// Outcome of one aggregation run
#[derive(Debug, Clone, Default)]
pub struct WriteSummary {
    /// Number of blocks written
    pub blocks_written: usize,
    /// Number of directory entries passed over
    pub directories_skipped: usize,
    /// Files left out under the skip policy
    pub skipped: Vec<SkippedFile>,
    /// Bytes of file content embedded in the document
    pub content_bytes: u64,
    /// Stats for every written file, in document order
    pub file_details: Vec<(String, FileStats)>,
}

impl WriteSummary {
    /// Total lines across written files
    pub fn total_lines(&self) -> usize {
        self.file_details.iter().map(|(_, s)| s.lines).sum()
    }

    /// Total characters across written files
    pub fn total_chars(&self) -> usize {
        self.file_details.iter().map(|(_, s)| s.chars).sum()
    }

    pub(crate) fn record_skip(&mut self, path: &Path, reason: impl ToString) {
        self.skipped.push(SkippedFile {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        });
    }
}

/*!
 * Directory enumeration
 */

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use glob_match::glob_match;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{DumpError, Result};
use crate::types::{Entry, EntryKind, FileList};

/// Receives the raw, unsorted enumeration before it is sorted
pub trait ScanObserver {
    fn on_entries(&self, entries: &[Entry]);
}

impl<F> ScanObserver for F
where
    F: Fn(&[Entry]),
{
    fn on_entries(&self, entries: &[Entry]) {
        self(entries)
    }
}

/// Logs the unsorted enumeration at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn on_entries(&self, entries: &[Entry]) {
        let paths: Vec<&str> = entries.iter().map(|e| e.display.as_str()).collect();
        debug!(count = entries.len(), entries = ?paths, "enumerated entries");
    }
}

/// Recursive enumerator for a root directory
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Optional hook for the unsorted enumeration
    observer: Option<Box<dyn ScanObserver>>,
}

impl Scanner {
    /// Create a new scanner without an observer
    pub fn new(config: Config) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    /// Attach an observer that sees the list before sorting
    pub fn with_observer(mut self, observer: impl ScanObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Walk the root once and return every entry below it, sorted by path
    pub fn scan(&self) -> Result<FileList> {
        let root = &self.config.root;
        if !root.is_dir() {
            return Err(DumpError::InvalidRoot { path: root.clone() });
        }

        let output = self.output_identity();
        let mut entries = Vec::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.should_prune(e));

        for item in walker {
            let entry = match item {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    warn!(root = %root.display(), error = %e, "cannot read root directory");
                    return Err(DumpError::InvalidRoot { path: root.clone() });
                }
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            if self.is_output_file(&entry, output.as_ref()) {
                debug!(path = %entry.path().display(), "leaving output document out of the listing");
                continue;
            }

            entries.push(Entry::new(entry.path(), EntryKind::from(entry.file_type())));
        }

        if let Some(observer) = &self.observer {
            observer.on_entries(&entries);
        }

        Ok(FileList::new(entries))
    }

    /// Check whether a walked entry (and everything under it) is left out
    pub fn should_prune(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();

        if !self.config.include_hidden && name.starts_with('.') {
            return true;
        }

        entry.file_type().is_dir() && self.is_excluded_dir(&name)
    }

    /// Check a directory name against the exclusion patterns
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.config
            .exclude_dirs
            .iter()
            .any(|pattern| glob_match(pattern, name))
    }

    /// Canonical path and file name of the output document, if it exists
    fn output_identity(&self) -> Option<(PathBuf, OsString)> {
        let canonical = fs::canonicalize(&self.config.output_file).ok()?;
        let name = canonical.file_name()?.to_os_string();
        Some((canonical, name))
    }

    fn is_output_file(
        &self,
        entry: &DirEntry,
        output: Option<&(PathBuf, OsString)>,
    ) -> bool {
        let Some((canonical, name)) = output else {
            return false;
        };
        entry.file_type().is_file()
            && entry.file_name() == name.as_os_str()
            && same_file(entry.path(), canonical)
    }
}

fn same_file(path: &Path, canonical: &Path) -> bool {
    fs::canonicalize(path).map_or(false, |p| p == canonical)
}

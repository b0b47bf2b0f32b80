/*!
 * Utility functions for treedump
 */

use once_cell::sync::Lazy;

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Directory names pruned by `--default-excludes`
pub static DEFAULT_EXCLUDE_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version Control
        ".git",
        ".svn",
        ".hg",
        ".bzr",
        // Dependencies
        "node_modules",
        "bower_components",
        ".yarn",
        ".pnpm-store",
        "vendor",
        // Build & Dist
        "dist",
        "build",
        "out",
        // Python
        "__pycache__",
        ".pytest_cache",
        "venv",
        ".venv",
        "*.egg-info",
        // Rust
        "target",
        // IDEs & Editors
        ".idea",
        ".vscode",
        // Caches
        ".cache",
        ".next",
        ".nuxt",
        "coverage",
        // Other Build Tools
        ".gradle",
        ".terraform",
    ]
});

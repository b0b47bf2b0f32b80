/*!
 * Reporting functionality for treedump
 *
 * Renders a summary of a finished run using the tabled library.
 */

use std::time::Duration;

use chrono::{DateTime, Local};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::{FileStats, SkippedFile, WriteSummary};
use crate::utils::format_file_size;

/// Statistics for a finished run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Output file path
    pub output_file: String,
    /// Root directory that was scanned
    pub root: String,
    /// Time taken to scan and write
    pub duration: Duration,
    /// When the run finished
    pub finished_at: DateTime<Local>,
    /// Number of entries enumerated
    pub entries_listed: usize,
    /// Number of blocks written
    pub blocks_written: usize,
    /// Number of directories passed over
    pub directories_skipped: usize,
    /// Bytes of embedded content
    pub content_bytes: u64,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each written file
    pub file_details: Vec<(String, FileStats)>,
    /// Files left out because they could not be read
    pub skipped: Vec<SkippedFile>,
}

impl RunReport {
    /// Assemble a report from the writer summary
    pub fn new(
        root: String,
        output_file: String,
        entries_listed: usize,
        duration: Duration,
        summary: WriteSummary,
    ) -> Self {
        Self {
            output_file,
            root,
            duration,
            finished_at: Local::now(),
            entries_listed,
            blocks_written: summary.blocks_written,
            directories_skipped: summary.directories_skipped,
            content_bytes: summary.content_bytes,
            total_lines: summary.total_lines(),
            total_chars: summary.total_chars(),
            file_details: summary.file_details,
            skipped: summary.skipped,
        }
    }
}

/// Report generator for finished runs
pub struct Reporter;

impl Reporter {
    /// Create a new reporter
    pub fn new() -> Self {
        Self
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &RunReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Keep the last path segments that fit in `max_len`
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.chars().count() <= max_len {
            return path.to_string();
        }

        let mut segments = Vec::new();
        let mut current_len = 3; // "..."
        for part in path.rsplit('/') {
            let part_len = part.chars().count() + 1;
            if current_len + part_len > max_len {
                break;
            }
            segments.push(part);
            current_len += part_len;
        }

        if segments.is_empty() {
            let tail: String = path
                .chars()
                .rev()
                .take(max_len.saturating_sub(3))
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            return format!("...{}", tail);
        }

        let mut result = String::from("...");
        for part in segments.iter().rev() {
            result.push('/');
            result.push_str(part);
        }
        result
    }

    fn create_summary_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = vec![
            SummaryRow {
                key: "📂 Root".to_string(),
                value: report.root.clone(),
            },
            SummaryRow {
                key: "📄 Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "🔎 Entries Listed".to_string(),
                value: self.format_number(report.entries_listed),
            },
            SummaryRow {
                key: "🧱 Blocks Written".to_string(),
                value: self.format_number(report.blocks_written),
            },
            SummaryRow {
                key: "📁 Directories".to_string(),
                value: self.format_number(report.directories_skipped),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(report.total_lines),
            },
            SummaryRow {
                key: "📦 Content Size".to_string(),
                value: format_file_size(report.content_bytes),
            },
        ];

        if !report.skipped.is_empty() {
            rows.push(SummaryRow {
                key: "⚠️ Unreadable".to_string(),
                value: self.format_number(report.skipped.len()),
            });
        }

        rows.push(SummaryRow {
            key: "🕒 Finished".to_string(),
            value: report.finished_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        });

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_files_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Chars")]
            chars: String,
        }

        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(_, a), (_, b)| b.chars.cmp(&a.chars));

        let files_to_show = if files.len() > 15 {
            &files[0..10]
        } else {
            &files[..]
        };

        let rows: Vec<FileRow> = files_to_show
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                lines: self.format_number(info.lines),
                chars: self.format_number(info.chars),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_skipped_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct SkippedRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Reason")]
            reason: String,
        }

        let rows: Vec<SkippedRow> = report
            .skipped
            .iter()
            .map(|s| SkippedRow {
                path: self.format_path(&s.path.to_string_lossy(), 60),
                reason: s.reason.clone(),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    /// Generate the console report
    pub fn generate_report(&self, report: &RunReport) -> String {
        let files_title = if report.file_details.len() > 15 {
            "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT  📋"
        } else {
            "📋  WRITTEN FILES"
        };

        let mut out = format!("{}\n{}", files_title, self.create_files_table(report));

        if !report.skipped.is_empty() {
            out.push_str(&format!(
                "\n\n⚠️  UNREADABLE FILES\n{}",
                self.create_skipped_table(report)
            ));
        }

        out.push_str(&format!(
            "\n\n✅  DUMP COMPLETE\n{}",
            self.create_summary_table(report)
        ));
        out
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_path_keeps_trailing_segments() {
        let reporter = Reporter::new();
        assert_eq!(reporter.format_path("src/main.rs", 60), "src/main.rs");

        let long = format!("{}/deep/file.rs", "a".repeat(80));
        assert_eq!(reporter.format_path(&long, 20), ".../deep/file.rs");
    }

    #[test]
    fn report_mentions_skipped_files() {
        let mut summary = WriteSummary {
            blocks_written: 1,
            file_details: vec![("root/a.txt".to_string(), FileStats { lines: 1, chars: 5 })],
            ..WriteSummary::default()
        };
        summary.record_skip(std::path::Path::new("root/bad.bin"), "invalid UTF-8");

        let report = RunReport::new(
            "root".to_string(),
            "all.txt".to_string(),
            2,
            Duration::from_millis(3),
            summary,
        );
        let text = Reporter::new().generate_report(&report);

        assert!(text.contains("root/a.txt"));
        assert!(text.contains("UNREADABLE FILES"));
        assert!(text.contains("root/bad.bin"));
        assert!(text.contains("DUMP COMPLETE"));
    }
}

//! Summary of a completed listing

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Statistics for one listing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSummary {
    /// Root the walk started from
    pub root: PathBuf,
    /// Number of paths listed
    pub file_count: usize,
    /// Wall time spent walking, in milliseconds
    pub elapsed_ms: u64,
    /// Timestamp of when the listing finished
    pub listed_at: chrono::DateTime<chrono::Utc>,
}

impl ListingSummary {
    pub fn new(root: &Path, file_count: usize, elapsed: Duration) -> Self {
        Self {
            root: root.to_path_buf(),
            file_count,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            listed_at: chrono::Utc::now(),
        }
    }

    /// Human-readable one-line summary
    pub fn render(&self) -> String {
        let noun = if self.file_count == 1 { "file" } else { "files" };
        format!(
            "Listed {} {} under {} in {}",
            self.file_count,
            noun,
            self.root.display(),
            format_elapsed(self.elapsed_ms)
        )
    }
}

/// Format an elapsed wall time given in milliseconds. Walks of small trees
/// finish well under a millisecond and show as `<1ms`.
pub fn format_elapsed(millis: u64) -> String {
    match millis {
        0 => "<1ms".to_string(),
        1..=999 => format!("{}ms", millis),
        1_000..=59_999 => format!("{:.2}s", millis as f64 / 1000.0),
        _ => format!("{}m{:02}s", millis / 60_000, (millis % 60_000) / 1000),
    }
}

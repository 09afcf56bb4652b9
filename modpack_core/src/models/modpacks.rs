use std::path::Path;

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

/// Summary of a modpack directory, shown on its card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModpackDetails {
    pub name: String,
    pub file_count: u64,
    pub total_bytes: u64,
    pub modified_at: Option<DateTime<Utc>>,
}

impl ModpackDetails {
    /// Walks `path` and totals every regular file beneath it.
    /// `modified_at` is the newest modification time seen, the directory itself included.
    pub fn scan(name: &str, path: &Path) -> Result<Self, walkdir::Error> {
        let mut details = ModpackDetails {
            name: name.to_string(),
            file_count: 0,
            total_bytes: 0,
            modified_at: None,
        };

        for entry in WalkDir::new(path) {
            let entry = entry?;
            let metadata = entry.metadata()?;
            if metadata.is_file() {
                details.file_count += 1;
                details.total_bytes += metadata.len();
            }
            if let Ok(modified) = metadata.modified() {
                let modified = DateTime::<Utc>::from(modified);
                if details.modified_at.map_or(true, |newest| modified > newest) {
                    details.modified_at = Some(modified);
                }
            }
        }

        Ok(details)
    }

    pub fn human_size(&self) -> String {
        const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
        let mut size = self.total_bytes as f64;
        let mut unit = 0;
        while size >= 1024.0 && unit < UNITS.len() - 1 {
            size /= 1024.0;
            unit += 1;
        }
        if unit == 0 {
            format!("{} {}", self.total_bytes, UNITS[0])
        } else {
            format!("{:.1} {}", size, UNITS[unit])
        }
    }
}

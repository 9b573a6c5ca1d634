/// Reverse image index
///
/// The organizing script writes `image_index.json` mapping each asset
/// category to the files it placed there. This module inverts that manifest
/// into a lowercased-filename lookup used as the first stage of image
/// resolution. The index is built once at startup and never re-read; the
/// process is short-lived and the manifest only changes when the offline
/// scripts run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One manifest entry as written by the organizing script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub path: String,
}

/// Where an indexed file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Path relative to the install root
    pub path: String,
    /// Asset category the file was filed under
    pub category: String,
}

/// Lowercased original filename -> location.
#[derive(Debug, Clone, Default)]
pub struct ImageIndex {
    entries: HashMap<String, IndexEntry>,
}

impl ImageIndex {
    /// Build the reverse lookup from manifest JSON. Entries with an empty
    /// filename or path are skipped. Duplicate lowercased filenames across
    /// categories keep the last one seen, matching how the index has always
    /// been built.
    pub fn from_json(json: &str) -> Result<ImageIndex, serde_json::Error> {
        let manifest: HashMap<String, Vec<ManifestEntry>> = serde_json::from_str(json)?;

        let mut entries = HashMap::new();
        for (category, files) in manifest {
            for entry in files {
                let original = entry.original.to_lowercase();
                if original.is_empty() || entry.path.is_empty() {
                    continue;
                }
                entries.insert(
                    original,
                    IndexEntry {
                        path: entry.path,
                        category: category.clone(),
                    },
                );
            }
        }

        Ok(ImageIndex { entries })
    }

    /// Load the index file. A missing or malformed manifest yields an empty
    /// index with a console warning; resolution then falls through to the
    /// probe and CDN stages.
    pub fn load(index_file: &Path) -> ImageIndex {
        if !index_file.exists() {
            eprintln!(
                "⚠️  WARNING: image index not found: {}",
                index_file.display()
            );
            return ImageIndex::default();
        }

        let contents = match std::fs::read_to_string(index_file) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("⚠️  WARNING: could not read image index: {}", e);
                return ImageIndex::default();
            }
        };

        match ImageIndex::from_json(&contents) {
            Ok(index) => {
                println!("📁 Image index loaded: {} files", index.len());
                index
            }
            Err(e) => {
                eprintln!("⚠️  WARNING: could not parse image index: {}", e);
                ImageIndex::default()
            }
        }
    }

    /// Look up a filename. The key must already be lowercased.
    pub fn get(&self, filename_lower: &str) -> Option<&IndexEntry> {
        self.entries.get(filename_lower)
    }

    /// Whether a filename (already lowercased) is known.
    pub fn contains(&self, filename_lower: &str) -> bool {
        self.entries.contains_key(filename_lower)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

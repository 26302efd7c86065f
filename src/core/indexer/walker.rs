//! File system walker with extension and name filtering.
//!
//! Traverses directory trees depth-first in file-name order, so two
//! walks over the same tree yield the same paths. Handles errors
//! gracefully (permission denied, etc.) without crashing.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File system walker with extension and exclude filtering
pub struct FileWalker {
    /// Lowercased extensions to include, without the dot
    extensions: HashSet<String>,

    /// Substrings that exclude an entry by name
    exclude_patterns: Vec<String>,

    /// Stop after this many files
    max_files: usize,

    /// Do not descend below this depth (root is depth 0)
    max_depth: usize,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// # Arguments
    ///
    /// * `extensions` - Extensions to include, with or without a leading dot
    /// * `exclude_patterns` - Substrings matched against entry names
    /// * `max_files` - Maximum number of files to return
    /// * `max_depth` - Maximum directory depth
    /// * `max_file_size_mb` - Maximum file size in megabytes
    pub fn new(
        extensions: Vec<String>,
        exclude_patterns: Vec<String>,
        max_files: usize,
        max_depth: usize,
        max_file_size_mb: usize,
    ) -> Self {
        let extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        let exclude_patterns = exclude_patterns
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();

        Self {
            extensions,
            exclude_patterns,
            max_files,
            max_depth,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        }
    }

    /// Collect matching files from a directory
    ///
    /// Stops as soon as `max_files` paths have been collected.
    /// Walk errors are logged and skipped.
    pub fn collect_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        if self.max_files == 0 {
            return files;
        }

        for entry in WalkDir::new(root)
            .follow_links(false)
            .max_depth(self.max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.has_allowed_extension(entry.path()) {
                continue;
            }

            if let Ok(metadata) = entry.metadata() {
                if metadata.len() > self.max_file_size_bytes {
                    tracing::debug!(
                        "Skipping large file: {:?} ({} bytes)",
                        entry.path(),
                        metadata.len()
                    );
                    continue;
                }
            }

            files.push(entry.into_path());
            if files.len() >= self.max_files {
                tracing::debug!("Reached file cap of {}", self.max_files);
                break;
            }
        }

        files
    }

    /// Determine if a directory entry should be processed
    ///
    /// Filters out hidden directories and excluded names.
    /// Never filters the root directory itself.
    fn should_process_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }

        let name = entry.file_name().to_string_lossy();

        if name.starts_with('.') && entry.file_type().is_dir() {
            return false;
        }

        if let Some(pattern) = self.exclude_patterns.iter().find(|p| name.contains(p.as_str())) {
            tracing::debug!("Skipping {:?} (matches {:?})", entry.path(), pattern);
            return false;
        }

        true
    }

    fn has_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.contains(&e.to_lowercase()))
            .unwrap_or(false)
    }
}

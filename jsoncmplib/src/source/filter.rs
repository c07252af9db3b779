//! File filtering and discovery with glob pattern support.
//!
//! This module provides functionality to discover JSON measurement files
//! with support for include/exclude glob patterns.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::JsonCmpError;
use crate::Result;

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to include (if empty, include all .json files)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config (includes all .json files).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| JsonCmpError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.include.push(pat);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| JsonCmpError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Add multiple include patterns.
    pub fn include_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern)?;
        }
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Check if a path matches the filter criteria.
    ///
    /// A path matches if:
    /// 1. It's a .json file
    /// 2. It matches at least one include pattern (or include is empty)
    /// 3. It doesn't match any exclude pattern
    pub fn matches(&self, path: &Path) -> bool {
        // Must be a .json file
        if path.extension().is_none_or(|ext| ext != "json") {
            return false;
        }

        let path_str = path.to_string_lossy();

        // Check excludes first
        for pattern in &self.exclude {
            if pattern.matches(&path_str) {
                return false;
            }
        }

        // If no include patterns, include all
        if self.include.is_empty() {
            return true;
        }

        // Must match at least one include pattern
        for pattern in &self.include {
            if pattern.matches(&path_str) {
                return true;
            }
        }

        false
    }
}

/// Check if a directory should be skipped during traversal.
fn should_skip_dir(name: &str) -> bool {
    // Skip hidden directories
    name.starts_with('.')
}

/// Discover JSON measurement files in a directory.
///
/// Walks the directory tree and returns all .json files that match the
/// filter, sorted for a deterministic listing order. Passing a single
/// file path returns that file if it matches.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(JsonCmpError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    if root.is_file() {
        if filter.matches(root) {
            files.push(root.to_path_buf());
        }
        return Ok(files);
    }

    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        // Always include the root directory
        if e.depth() == 0 {
            return true;
        }
        // For non-root entries, skip hidden dirs
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !should_skip_dir(name);
        }
        // Include files
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();

        if path.is_file() && filter.matches(path) {
            files.push(path.to_path_buf());
        }
    }

    // Sort for deterministic listing order
    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_test_files(dir: &Path) {
        fs::create_dir_all(dir.join("measurements")).unwrap();
        fs::create_dir_all(dir.join("measurements/archive")).unwrap();
        fs::create_dir_all(dir.join(".hidden")).unwrap();

        fs::write(dir.join("measurements/run_01.json"), "{}").unwrap();
        fs::write(dir.join("measurements/run_02.json"), "{}").unwrap();
        fs::write(dir.join("measurements/archive/old.json"), "{}").unwrap();
        fs::write(dir.join("measurements/notes.txt"), "notes").unwrap();
        fs::write(dir.join(".hidden/secret.json"), "{}").unwrap();
        fs::write(dir.join("README.md"), "# Readme").unwrap();
    }

    #[test]
    fn test_filter_matches_json_files() {
        let filter = FilterConfig::new();

        assert!(filter.matches(Path::new("measurements/run_01.json")));
        assert!(filter.matches(Path::new("data.json")));
        assert!(!filter.matches(Path::new("README.md")));
        assert!(!filter.matches(Path::new("notes.txt")));
    }

    #[test]
    fn test_filter_with_include_pattern() {
        let filter = FilterConfig::new().include("**/run_*.json").unwrap();

        assert!(filter.matches(Path::new("measurements/run_01.json")));
        assert!(!filter.matches(Path::new("measurements/baseline.json")));
    }

    #[test]
    fn test_filter_with_exclude_pattern() {
        let filter = FilterConfig::new().exclude("**/archive/**").unwrap();

        assert!(filter.matches(Path::new("measurements/run_01.json")));
        assert!(!filter.matches(Path::new("measurements/archive/old.json")));
    }

    #[test]
    fn test_filter_with_multiple_patterns() {
        let filter = FilterConfig::new()
            .include_many(&["**/run_*.json", "**/baseline*.json"])
            .unwrap()
            .exclude("**/archive/**")
            .unwrap();

        assert!(filter.matches(Path::new("m/run_03.json")));
        assert!(filter.matches(Path::new("m/baseline.json")));
        assert!(!filter.matches(Path::new("m/archive/run_01.json")));
        assert!(!filter.matches(Path::new("m/other.json")));
    }

    #[test]
    fn test_discover_files() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let filter = FilterConfig::new();
        let files = discover_files(temp.path(), &filter).unwrap();

        assert!(files.iter().any(|p| p.ends_with("run_01.json")));
        assert!(files.iter().any(|p| p.ends_with("run_02.json")));
        assert!(files.iter().any(|p| p.ends_with("archive/old.json")));

        // Non-JSON and hidden files are skipped
        assert!(!files.iter().any(|p| p.ends_with("notes.txt")));
        assert!(!files
            .iter()
            .any(|p| p.to_string_lossy().contains(".hidden")));
    }

    #[test]
    fn test_discover_files_sorted() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let filter = FilterConfig::new();
        let files = discover_files(temp.path(), &filter).unwrap();

        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_discover_single_file() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("run.json");
        fs::write(&file_path, "{}").unwrap();

        let filter = FilterConfig::new();
        let files = discover_files(&file_path, &filter).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0], file_path);
    }

    #[test]
    fn test_discover_files_nonexistent() {
        let filter = FilterConfig::new();
        let result = discover_files("/nonexistent/path", &filter);

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let result = FilterConfig::new().include("[invalid");

        assert!(result.is_err());
        if let Err(JsonCmpError::InvalidGlob { pattern, .. }) = result {
            assert_eq!(pattern, "[invalid");
        } else {
            panic!("Expected InvalidGlob error");
        }
    }
}

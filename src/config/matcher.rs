//! Source file matcher for the usage scan.

use std::path::Path;

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::Settings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid source include pattern '{pattern}': {source}")]
    InvalidIncludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Matches files against `includePatterns` and `excludeMarkers`.
#[derive(Debug, Clone)]
pub struct SourceMatcher {
    include_set: GlobSet,
    exclude_markers: Vec<String>,
}

impl SourceMatcher {
    /// Creates a new matcher from settings.
    pub fn new(settings: &Settings) -> Result<Self, MatcherError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &settings.include_patterns {
            let glob = Glob::new(pattern).map_err(|source| {
                MatcherError::InvalidIncludePattern { pattern: pattern.clone(), source }
            })?;
            builder.add(glob);
        }

        Ok(Self { include_set: builder.build()?, exclude_markers: settings.exclude_markers.clone() })
    }

    /// Returns true if `path` is a source file under `search_root`.
    ///
    /// Patterns and markers are checked against the path relative to `search_root`,
    /// so a marker appearing in the search root itself does not exclude everything.
    #[must_use]
    pub fn is_source_file(&self, search_root: &Path, path: &Path) -> bool {
        let relative_path = path.strip_prefix(search_root).unwrap_or(path);
        self.is_source_file_relative(relative_path)
    }

    /// Returns true if the relative path matches `includePatterns` and contains no exclude marker.
    ///
    /// Markers are plain substrings: `build` also excludes `src/rebuild.ts`.
    #[must_use]
    pub fn is_source_file_relative(&self, relative_path: &Path) -> bool {
        if !self.include_set.is_match(relative_path) {
            return false;
        }

        let path_str = relative_path.to_string_lossy();
        !self.exclude_markers.iter().any(|marker| path_str.contains(marker.as_str()))
    }
}

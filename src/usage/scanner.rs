//! Textual search for translation key usages in source directories.

use std::collections::HashSet;
use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;

use super::variants::{
    key_variants,
    references_key,
};
use crate::config::{
    MatcherError,
    Settings,
    SourceMatcher,
};

/// Finds source files referencing a translation key.
///
/// Every lookup walks the search directories again and reads each source file;
/// nothing is cached between keys.
#[derive(Debug, Clone)]
pub struct UsageScanner {
    search_directories: Vec<PathBuf>,
    key_separator: String,
    matcher: SourceMatcher,
}

impl UsageScanner {
    /// 設定からスキャナーを作成
    pub fn new(settings: &Settings) -> Result<Self, MatcherError> {
        let matcher = SourceMatcher::new(settings)?;

        for directory in &settings.search_directories {
            if !directory.is_dir() {
                tracing::warn!(directory = %directory.display(), "Search directory does not exist");
            }
        }

        Ok(Self {
            search_directories: settings.search_directories.clone(),
            key_separator: settings.key_separator.clone(),
            matcher,
        })
    }

    /// Files referencing `key`, in discovery order and without duplicates.
    ///
    /// Duplicates are detected on the canonical path, so overlapping search
    /// directories spelled differently (`src`, `src/../src`) report a file once.
    ///
    /// Files that cannot be read as UTF-8 text count as non-matches.
    #[must_use]
    pub fn find_usages(&self, key: &str) -> Vec<PathBuf> {
        let variants = key_variants(key, &self.key_separator);
        let mut seen = HashSet::new();
        let mut usages = Vec::new();

        for file_path in self.source_files() {
            let content = match std::fs::read_to_string(&file_path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::trace!("Skipping unreadable file {:?}: {}", file_path, e);
                    continue;
                }
            };

            if !references_key(&content, key, &variants, &self.key_separator) {
                continue;
            }

            let identity = std::fs::canonicalize(&file_path).unwrap_or_else(|_| file_path.clone());
            if seen.insert(identity) {
                usages.push(file_path);
            }
        }

        usages
    }

    /// ソースファイルを検索
    ///
    /// `.gitignore` などの ignore ファイルは無視し、除外マーカーのみで絞り込む
    #[must_use]
    pub fn source_files(&self) -> Vec<PathBuf> {
        let mut found_files = Vec::new();
        for directory in &self.search_directories {
            self.collect_source_files(directory, &mut found_files);
        }
        found_files
    }

    /// `search_root` 配下のソースファイルをファイル名順に追加する
    fn collect_source_files(&self, search_root: &Path, found_files: &mut Vec<PathBuf>) {
        for result in WalkBuilder::new(search_root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            // ファイルのみを対象
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            if self.matcher.is_source_file(search_root, path) {
                found_files.push(path.to_path_buf());
            }
        }
    }
}

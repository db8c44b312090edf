use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// 検証エラーを番号付きリストに整形する
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings shared by the audit and removal tools.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Catalog of the source locale (the language the app is authored in).
    pub source_catalog: PathBuf,
    /// Catalog of the target locale.
    pub target_catalog: PathBuf,

    /// Directories searched for key usages, in order.
    pub search_directories: Vec<PathBuf>,

    pub key_separator: String,

    /// Glob patterns (relative to each search directory) selecting source files.
    pub include_patterns: Vec<String>,
    /// Any source path containing one of these substrings is skipped.
    pub exclude_markers: Vec<String>,

    pub backup_suffix: String,

    /// Flat keys removed by `remove-i18n-keys` when none are given on the command line.
    pub keys_to_remove: Vec<String>,

    /// Paths in the usage details are shown relative to this directory.
    pub project_root: Option<PathBuf>,

    pub report: ReportConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfig {
    /// Number of used keys listed with their files.
    pub detailed_keys: usize,
    /// Files shown per detailed key before collapsing into "... and N more".
    pub files_per_key: usize,
    /// A progress line is printed every `progress_interval` scanned keys.
    pub progress_interval: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { detailed_keys: 10, files_per_key: 3, progress_interval: 10 }
    }
}

impl Settings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Invalid separator or suffix
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.source_catalog.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "sourceCatalog",
                "The path cannot be empty. Example: \"public/locales/ja/common.json\"",
            ));
        }

        if self.target_catalog.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "targetCatalog",
                "The path cannot be empty. Example: \"public/locales/en/common.json\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "includePatterns",
                "At least one pattern is required. Example: [\"**/*.{js,ts,tsx}\"]",
            ));
        }

        for (index, pattern) in self.include_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("includePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, marker) in self.exclude_markers.iter().enumerate() {
            if marker.is_empty() {
                errors.push(ValidationError::new(
                    format!("excludeMarkers[{index}]"),
                    "An empty marker would exclude every file. Remove it or use e.g. \"node_modules\"",
                ));
            }
        }

        if self.backup_suffix.is_empty() {
            errors.push(ValidationError::new(
                "backupSuffix",
                "The suffix cannot be empty, otherwise the backup would overwrite the catalog",
            ));
        }

        if self.report.progress_interval == 0 {
            errors.push(ValidationError::new(
                "report.progressInterval",
                "The interval must be at least 1",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// 相対パスを `base` からの相対パスとして解決する
    ///
    /// 設定ファイル内のパスは設定ファイルのディレクトリを基準とする
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() && !path.as_os_str().is_empty() {
                *path = base.join(&*path);
            }
        };

        resolve(&mut self.source_catalog);
        resolve(&mut self.target_catalog);
        self.search_directories.iter_mut().for_each(resolve);
        if let Some(root) = self.project_root.as_mut() {
            resolve(root);
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_catalog: PathBuf::from("public/locales/ja/common.json"),
            target_catalog: PathBuf::from("public/locales/en/common.json"),
            search_directories: vec![PathBuf::from("src"), PathBuf::from("components")],
            key_separator: ".".to_string(),
            include_patterns: vec!["**/*.{js,jsx,ts,tsx}".to_string()],
            exclude_markers: ["node_modules", ".git", "dist", "build"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            backup_suffix: ".backup".to_string(),
            keys_to_remove: Vec::new(),
            project_root: None,
            report: ReportConfig::default(),
        }
    }
}

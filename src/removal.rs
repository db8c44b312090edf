//! Removal pipeline: delete listed keys from both catalogs and compact them.

use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};

use crate::catalog::{
    Catalog,
    clean_empty_objects,
    load_catalog,
    remove_key,
    save_catalog,
    write_backup,
};
use crate::config::Settings;

/// Keys removed from one catalog and keys that were not there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRemoval {
    /// Removed keys, in request order.
    pub removed: Vec<String>,
    /// Requested keys with no leaf at their path.
    pub not_found: Vec<String>,
}

/// Remove every key independently, then drop objects left empty.
///
/// A missing key never stops the remaining ones.
pub fn remove_keys(catalog: &mut Catalog, keys: &[String], separator: &str) -> KeyRemoval {
    let mut result = KeyRemoval::default();

    for key in keys {
        if remove_key(catalog, key, separator) {
            result.removed.push(key.clone());
        } else {
            result.not_found.push(key.clone());
        }
    }

    *catalog = clean_empty_objects(catalog);
    result
}

/// Parse a deletion list file: one flat key per line.
///
/// Blank lines and lines starting with `#` are ignored.
#[must_use]
pub fn parse_key_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Outcome of processing one catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Edited catalog written back.
    Saved,
    /// File skipped; it could not be read or parsed.
    LoadFailed,
    /// Keys were removed in memory but the file could not be written.
    SaveFailed,
}

/// What happened to one catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Catalog path.
    pub path: PathBuf,
    /// Final state of the file.
    pub status: FileStatus,
    /// `None` when the backup could not be written (or the file never loaded).
    pub backup: Option<PathBuf>,
    /// Per-key results; empty when the file never loaded.
    pub removal: KeyRemoval,
}

/// Reports for the source and target catalogs, in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalSummary {
    /// One report per processed file.
    pub files: Vec<FileReport>,
}

impl RemovalSummary {
    /// True when any file failed to load or save.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.files.iter().any(|file| file.status != FileStatus::Saved)
    }
}

/// Remove `keys` from the source and target catalogs, writing a backup of each first.
///
/// Each file is handled on its own: a failure is reported and the next file still runs.
pub fn run_removal(
    settings: &Settings,
    keys: &[String],
    out: &mut dyn Write,
) -> std::io::Result<RemovalSummary> {
    writeln!(out, "Removing unused i18n keys")?;
    writeln!(out, "{}", "=".repeat(50))?;

    let mut summary = RemovalSummary::default();
    for path in [&settings.source_catalog, &settings.target_catalog] {
        let report = process_file(settings, path, keys, out)?;
        summary.files.push(report);
    }

    writeln!(out)?;
    writeln!(out, "Done.")?;
    writeln!(
        out,
        "Review the changes. The original files can be restored from the '{}' copies.",
        settings.backup_suffix
    )?;

    Ok(summary)
}

/// Load, back up, edit and save one catalog, reporting each step to `out`.
fn process_file(
    settings: &Settings,
    path: &Path,
    keys: &[String],
    out: &mut dyn Write,
) -> std::io::Result<FileReport> {
    writeln!(out)?;
    match path.file_name() {
        Some(name) => writeln!(out, "Processing: {} ({})", name.to_string_lossy(), path.display())?,
        None => writeln!(out, "Processing: {}", path.display())?,
    }

    let mut report = FileReport {
        path: path.to_path_buf(),
        status: FileStatus::LoadFailed,
        backup: None,
        removal: KeyRemoval::default(),
    };

    let mut loaded = match load_catalog(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("{e}");
            writeln!(out, "  Failed to load: {e}")?;
            return Ok(report);
        }
    };

    match write_backup(&loaded, &settings.backup_suffix) {
        Ok(backup) => {
            writeln!(out, "  Backup created: {}", backup.display())?;
            report.backup = Some(backup);
        }
        Err(e) => {
            tracing::warn!("{e}");
            writeln!(out, "  Failed to create backup: {e}")?;
        }
    }

    report.removal = remove_keys(&mut loaded.catalog, keys, &settings.key_separator);
    // Both lists keep the order of `keys`, so they can be merged back with one cursor.
    let mut removed = report.removal.removed.iter().peekable();
    for key in keys {
        if removed.next_if(|removed_key| *removed_key == key).is_some() {
            writeln!(out, "  Removed: {key}")?;
        } else {
            tracing::warn!(path = %path.display(), "Key not found: {}", key);
            writeln!(out, "  Not found: {key}")?;
        }
    }

    match save_catalog(path, &loaded.catalog) {
        Ok(()) => {
            writeln!(out, "  Saved: {} keys removed", report.removal.removed.len())?;
            report.status = FileStatus::Saved;
        }
        Err(e) => {
            tracing::error!("{e}");
            writeln!(out, "  Failed to save: {e}")?;
            report.status = FileStatus::SaveFailed;
        }
    }

    Ok(report)
}

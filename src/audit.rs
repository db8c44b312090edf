//! Audit pipeline: compare both catalogs and find keys no source file references.

use std::collections::{
    BTreeMap,
    BTreeSet,
};
use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use crate::catalog::{
    CatalogError,
    key_set,
    load_catalog,
};
use crate::config::{
    MatcherError,
    Settings,
};
use crate::report::{
    self,
    AuditReport,
};
use crate::usage::UsageScanner;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error(transparent)]
    Load(#[from] CatalogError),

    #[error("Catalog '{}' is empty", path.display())]
    EmptyCatalog { path: PathBuf },

    #[error("Invalid source file patterns: {0}")]
    Matcher(#[from] MatcherError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Run the audit and write the text report to `out`.
///
/// Fails without scanning when either catalog cannot be loaded or is empty.
pub fn run_audit(settings: &Settings, out: &mut dyn Write) -> Result<AuditReport, AuditError> {
    writeln!(out, "Checking i18n key usage...")?;
    writeln!(out, "{}", "=".repeat(50))?;

    // Load both before bailing out so every broken catalog gets logged.
    let source = load_key_set(&settings.source_catalog, &settings.key_separator);
    let target = load_key_set(&settings.target_catalog, &settings.key_separator);
    let (source_keys, target_keys) = match (source, target) {
        (Ok(source), Ok(target)) => (source, target),
        (Err(e), _) | (_, Err(e)) => {
            writeln!(out, "Failed to load the catalogs")?;
            return Err(e);
        }
    };

    report::write_statistics(
        out,
        (&settings.source_catalog, source_keys.len()),
        (&settings.target_catalog, target_keys.len()),
    )?;

    let reconciliation = report::reconcile(&source_keys, &target_keys);
    report::write_reconciliation(out, &reconciliation)?;

    let scanner = UsageScanner::new(settings)?;
    let all_keys: BTreeSet<&String> = source_keys.union(&target_keys).collect();
    let total = all_keys.len();

    writeln!(out, "Searching for unused keys...")?;
    let mut used_keys = BTreeMap::new();
    let mut unused_keys = Vec::new();
    for (index, key) in all_keys.into_iter().enumerate() {
        let position = index + 1;
        // A zero interval (unvalidated settings) disables progress lines.
        if position.checked_rem(settings.report.progress_interval) == Some(0) {
            writeln!(out, "  Progress: {position}/{total}")?;
        }

        let files = scanner.find_usages(key);
        tracing::debug!(key = %key, files = files.len(), "Scanned key");
        if files.is_empty() {
            unused_keys.push(key.clone());
        } else {
            used_keys.insert(key.clone(), files);
        }
    }
    writeln!(out)?;

    let report = AuditReport {
        source_key_count: source_keys.len(),
        target_key_count: target_keys.len(),
        reconciliation,
        used_keys,
        unused_keys,
    };

    report::write_usage_summary(out, &report, settings.report, settings.project_root.as_deref())?;

    Ok(report)
}

/// Load a catalog and collect its flat keys.
///
/// Only a top-level `{}` is rejected; nested empty objects just yield no keys.
fn load_key_set(path: &Path, separator: &str) -> Result<BTreeSet<String>, AuditError> {
    let loaded = load_catalog(path).inspect_err(|e| tracing::error!("{e}"))?;

    if loaded.catalog.is_empty() {
        tracing::error!(path = %path.display(), "Catalog is empty");
        return Err(AuditError::EmptyCatalog { path: path.to_path_buf() });
    }

    Ok(key_set(&loaded.catalog, separator))
}

//! Key set reconciliation and the human-readable audit report.

use std::collections::{
    BTreeMap,
    BTreeSet,
};
use std::io::{
    self,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use serde::Serialize;

use crate::config::ReportConfig;

/// Keys present in only one of the two catalogs, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyReconciliation {
    pub only_in_source: Vec<String>,
    pub only_in_target: Vec<String>,
}

impl KeyReconciliation {
    #[must_use]
    pub fn is_fully_matching(&self) -> bool {
        self.only_in_source.is_empty() && self.only_in_target.is_empty()
    }
}

/// Compare the key sets of the source and target catalogs.
#[must_use]
pub fn reconcile(source: &BTreeSet<String>, target: &BTreeSet<String>) -> KeyReconciliation {
    KeyReconciliation {
        only_in_source: source.difference(target).cloned().collect(),
        only_in_target: target.difference(source).cloned().collect(),
    }
}

/// Structured result of one audit run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub source_key_count: usize,
    pub target_key_count: usize,
    pub reconciliation: KeyReconciliation,
    /// Key → files referencing it, in discovery order.
    pub used_keys: BTreeMap<String, Vec<PathBuf>>,
    /// Keys found in no source file, sorted.
    pub unused_keys: Vec<String>,
}

/// Path shown in reports: relative to `project_root` when it is under it.
#[must_use]
pub fn display_path(path: &Path, project_root: Option<&Path>) -> String {
    project_root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Key counts of both catalogs.
pub(crate) fn write_statistics(
    out: &mut dyn Write,
    source: (&Path, usize),
    target: (&Path, usize),
) -> io::Result<()> {
    writeln!(out, "Statistics:")?;
    writeln!(out, "  - source keys ({}): {}", source.0.display(), source.1)?;
    writeln!(out, "  - target keys ({}): {}", target.0.display(), target.1)?;
    writeln!(out)
}

pub(crate) fn write_reconciliation(
    out: &mut dyn Write,
    reconciliation: &KeyReconciliation,
) -> io::Result<()> {
    writeln!(out, "Key reconciliation:")?;

    if reconciliation.is_fully_matching() {
        writeln!(out, "  Source and target keys are fully matching")?;
        return writeln!(out);
    }

    write_key_list(out, "Keys only in source", &reconciliation.only_in_source)?;
    write_key_list(out, "Keys only in target", &reconciliation.only_in_target)
}

/// Indented bullet list under a `title (count):` heading.
fn write_key_list(out: &mut dyn Write, title: &str, keys: &[String]) -> io::Result<()> {
    if keys.is_empty() {
        return Ok(());
    }

    writeln!(out, "  {title} ({}):", keys.len())?;
    for key in keys {
        writeln!(out, "    - {key}")?;
    }
    writeln!(out)
}

/// Used/unused counts, the unused list, then a capped sample of where used keys appear.
pub(crate) fn write_usage_summary(
    out: &mut dyn Write,
    report: &AuditReport,
    config: ReportConfig,
    project_root: Option<&Path>,
) -> io::Result<()> {
    writeln!(out, "Usage summary:")?;
    writeln!(out, "  - used keys: {}", report.used_keys.len())?;
    writeln!(out, "  - unused keys: {}", report.unused_keys.len())?;
    writeln!(out)?;

    if report.unused_keys.is_empty() {
        writeln!(out, "All keys are used")?;
    } else {
        writeln!(out, "Unused keys:")?;
        for key in &report.unused_keys {
            writeln!(out, "  - {key}")?;
        }
    }
    writeln!(out)?;

    if report.used_keys.is_empty() || config.detailed_keys == 0 {
        return Ok(());
    }

    writeln!(out, "Used key details (first {}):", config.detailed_keys)?;
    for (key, files) in report.used_keys.iter().take(config.detailed_keys) {
        writeln!(out, "  {key}:")?;
        for file in files.iter().take(config.files_per_key) {
            writeln!(out, "    - {}", display_path(file, project_root))?;
        }
        if files.len() > config.files_per_key {
            writeln!(out, "    ... and {} more files", files.len() - config.files_per_key)?;
        }
    }

    Ok(())
}

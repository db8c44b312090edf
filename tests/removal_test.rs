//! キー削除ツールのエンドツーエンドテスト

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::missing_docs_in_private_items)]

use std::fs;
use std::path::Path;

use i18n_catalog_tools::config::Settings;
use i18n_catalog_tools::removal::{
    FileStatus,
    parse_key_list,
    run_removal,
};
use pretty_assertions::assert_eq;
use serde_json::{
    Value,
    json,
};
use tempfile::TempDir;

const SOURCE: &str = r#"{
  "home": {
    "title": "ホーム",
    "hero": {
      "cta": {
        "mobile": "始める"
      }
    }
  },
  "speak": {
    "modal": {
      "startFrom": "開始"
    },
    "title": "話す"
  }
}"#;

const TARGET: &str = r#"{
  "speak": {
    "modal": {
      "startFrom": "Start"
    },
    "title": "Speak"
  },
  "home": {
    "title": "Home"
  }
}"#;

fn settings_for(root: &Path) -> Settings {
    Settings {
        source_catalog: root.join("ja/common.json"),
        target_catalog: root.join("en/common.json"),
        ..Settings::default()
    }
}

fn setup(root: &Path) -> Settings {
    let settings = settings_for(root);
    for (path, content) in [(&settings.source_catalog, SOURCE), (&settings.target_catalog, TARGET)] {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    settings
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_removal_prunes_and_keeps_order() {
    let temp_dir = TempDir::new().unwrap();
    let settings = setup(temp_dir.path());
    let keys = parse_key_list("# unused\nspeak.modal.startFrom\nhome.hero.cta.mobile\n");

    let mut buffer = Vec::new();
    let summary = run_removal(&settings, &keys, &mut buffer).unwrap();

    assert!(!summary.has_failures());
    assert_eq!(
        read_json(&settings.source_catalog),
        json!({ "home": { "title": "ホーム" }, "speak": { "title": "話す" } })
    );

    let saved = fs::read_to_string(&settings.target_catalog).unwrap();
    assert_eq!(
        saved,
        "{\n  \"speak\": {\n    \"title\": \"Speak\"\n  },\n  \"home\": {\n    \"title\": \"Home\"\n  }\n}\n"
    );

    let target_report = &summary.files[1];
    assert_eq!(target_report.removal.removed, vec!["speak.modal.startFrom".to_string()]);
    assert_eq!(target_report.removal.not_found, vec!["home.hero.cta.mobile".to_string()]);
}

#[test]
fn test_removal_writes_backups_of_original_text() {
    let temp_dir = TempDir::new().unwrap();
    let settings = setup(temp_dir.path());

    let summary = run_removal(&settings, &["home.title".to_string()], &mut std::io::sink()).unwrap();

    let source_backup = temp_dir.path().join("ja/common.json.backup");
    let target_backup = temp_dir.path().join("en/common.json.backup");
    assert_eq!(fs::read_to_string(&source_backup).unwrap(), SOURCE);
    assert_eq!(fs::read_to_string(&target_backup).unwrap(), TARGET);
    assert_eq!(summary.files[0].backup.as_deref(), Some(source_backup.as_path()));
}

#[test]
fn test_removal_with_only_missing_keys_still_saves() {
    let temp_dir = TempDir::new().unwrap();
    let settings = setup(temp_dir.path());

    let summary =
        run_removal(&settings, &["does.not.exist".to_string()], &mut std::io::sink()).unwrap();

    let statuses: Vec<FileStatus> = summary.files.iter().map(|file| file.status).collect();
    assert_eq!(statuses, vec![FileStatus::Saved, FileStatus::Saved]);
    assert_eq!(read_json(&settings.target_catalog), serde_json::from_str::<Value>(TARGET).unwrap());
}

use std::ffi::OsString;
use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;
use thiserror::Error;

use super::Catalog;

/// Suffix of the sibling file a catalog is written to before it replaces the original.
const TEMP_SUFFIX: &str = ".tmp";

/// カタログの読み書きエラー
#[derive(Error, Debug)]
pub enum CatalogError {
    /// ファイルを読み込めない
    #[error("Failed to read catalog '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON として不正
    #[error("Failed to parse catalog '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// ルートがオブジェクトではない
    #[error("Catalog '{}' must contain a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },

    /// JSON へのシリアライズに失敗
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    /// 書き込みまたはリネームに失敗
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A catalog together with the file text it was parsed from.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    /// Where the catalog was read from.
    pub path: PathBuf,
    /// On-disk content at load time, written verbatim as the backup.
    pub raw: String,
    /// Parsed top-level object.
    pub catalog: Catalog,
}

/// Load a catalog file.
///
/// # Errors
/// Returns error if the file cannot be read, is not valid JSON, or its root is not an object.
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog, CatalogError> {
    tracing::debug!(path = %path.display(), "Loading catalog");

    let raw = fs::read_to_string(path)
        .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;

    // Editors on Windows like to prepend a BOM, which serde_json rejects.
    let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    let value: Value = serde_json::from_str(text)
        .map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })?;

    let Value::Object(catalog) = value else {
        return Err(CatalogError::NotAnObject { path: path.to_path_buf() });
    };

    Ok(LoadedCatalog { path: path.to_path_buf(), raw, catalog })
}

/// `common.json` + `.backup` → `common.json.backup`
#[must_use]
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Write the content the catalog was loaded from next to it.
///
/// Returns the backup path.
pub fn write_backup(loaded: &LoadedCatalog, suffix: &str) -> Result<PathBuf, CatalogError> {
    let path = backup_path(&loaded.path, suffix);
    fs::write(&path, &loaded.raw)
        .map_err(|source| CatalogError::Write { path: path.clone(), source })?;
    tracing::debug!(path = %path.display(), "Backup written");
    Ok(path)
}

/// Pretty JSON with two-space indentation, insertion order and literal non-ASCII.
pub fn to_pretty_json(catalog: &Catalog) -> Result<String, CatalogError> {
    let mut text = serde_json::to_string_pretty(catalog)?;
    text.push('\n');
    Ok(text)
}

/// Serialize a catalog over `path`.
///
/// The text goes to `<path>.tmp` first and is renamed into place, so a failed
/// write leaves the original file untouched.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let text = to_pretty_json(catalog)?;
    let temp_path = backup_path(path, TEMP_SUFFIX);

    fs::write(&temp_path, text)
        .map_err(|source| CatalogError::Write { path: temp_path.clone(), source })?;
    if let Err(source) = fs::rename(&temp_path, path) {
        if let Err(e) = fs::remove_file(&temp_path) {
            tracing::debug!(path = %temp_path.display(), "Failed to remove temporary file: {e}");
        }
        return Err(CatalogError::Write { path: path.to_path_buf(), source });
    }

    tracing::debug!(path = %path.display(), "Catalog saved");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[googletest::test]
    fn test_load_catalog_valid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ja.json");
        let raw = "{\n  \"greeting\": \"こんにちは\"\n}";
        fs::write(&path, raw).unwrap();

        let loaded = load_catalog(&path).expect("valid catalog");

        expect_that!(loaded.raw, eq(raw));
        expect_that!(loaded.path, eq(&path));
        expect_that!(loaded.catalog.get("greeting"), some(eq(&json!("こんにちは"))));
    }

    #[googletest::test]
    fn test_load_catalog_with_bom() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.json");
        fs::write(&path, "\u{feff}{\"a\": \"b\"}").unwrap();

        let loaded = load_catalog(&path).expect("BOM is tolerated");

        expect_that!(loaded.catalog.get("a"), some(eq(&json!("b"))));
    }

    #[googletest::test]
    fn test_load_catalog_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_catalog(&temp_dir.path().join("missing.json"));

        expect_that!(matches!(result, Err(CatalogError::Read { .. })), eq(true));
    }

    #[googletest::test]
    fn test_load_catalog_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ \"a\": ").unwrap();

        let error = load_catalog(&path).unwrap_err();

        expect_that!(matches!(error, CatalogError::Parse { .. }), eq(true));
        expect_that!(error.to_string(), contains_substring("broken.json"));
    }

    #[googletest::test]
    fn test_load_catalog_root_must_be_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.json");
        fs::write(&path, "[\"a\", \"b\"]").unwrap();

        let result = load_catalog(&path);

        expect_that!(matches!(result, Err(CatalogError::NotAnObject { .. })), eq(true));
    }

    #[googletest::test]
    fn test_backup_path_appends_suffix() {
        let path = backup_path(Path::new("/app/locales/ja/common.json"), ".backup");

        expect_that!(path, eq(&PathBuf::from("/app/locales/ja/common.json.backup")));
    }

    #[googletest::test]
    fn test_write_backup_copies_raw_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("common.json");
        let raw = "{\"b\":1,   \"a\":2}";
        fs::write(&path, raw).unwrap();
        let loaded = load_catalog(&path).unwrap();

        let backup = write_backup(&loaded, ".backup").expect("backup should succeed");

        expect_that!(backup, eq(&temp_dir.path().join("common.json.backup")));
        expect_that!(fs::read_to_string(&backup).unwrap(), eq(raw));
    }

    #[googletest::test]
    fn test_write_backup_failure() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = LoadedCatalog {
            path: temp_dir.path().join("missing-dir").join("common.json"),
            raw: "{}".to_string(),
            catalog: Catalog::new(),
        };

        let result = write_backup(&loaded, ".backup");

        expect_that!(matches!(result, Err(CatalogError::Write { .. })), eq(true));
    }

    #[googletest::test]
    fn test_to_pretty_json_format() {
        let catalog = json!({ "z": { "b": "日本語", "a": "" }, "y": 1 }).as_object().cloned().unwrap();

        let text = to_pretty_json(&catalog).unwrap();

        expect_that!(
            text,
            eq("{\n  \"z\": {\n    \"b\": \"日本語\",\n    \"a\": \"\"\n  },\n  \"y\": 1\n}\n")
        );
    }

    #[googletest::test]
    fn test_save_catalog_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.json");
        let catalog = json!({ "home": { "title": "Home" } }).as_object().cloned().unwrap();

        save_catalog(&path, &catalog).expect("save should succeed");

        let loaded = load_catalog(&path).unwrap();
        expect_that!(loaded.catalog, eq(&catalog));
    }

    #[googletest::test]
    fn test_save_catalog_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.json");

        save_catalog(&path, &Catalog::new()).expect("save should succeed");

        expect_that!(fs::read_to_string(&path).unwrap(), eq("{}\n"));
        expect_that!(temp_dir.path().join("en.json.tmp").exists(), eq(false));
    }

    #[googletest::test]
    fn test_save_catalog_failure_keeps_original() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.json");
        fs::write(&path, "{\"a\": 1}").unwrap();
        fs::create_dir(temp_dir.path().join("en.json.tmp")).unwrap();

        let result = save_catalog(&path, &Catalog::new());

        expect_that!(matches!(result, Err(CatalogError::Write { .. })), eq(true));
        expect_that!(fs::read_to_string(&path).unwrap(), eq("{\"a\": 1}"));
    }
}

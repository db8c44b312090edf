//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use crate::config::Settings;

/// `root` 配下にファイルを作成する（親ディレクトリも作成）
///
/// # Returns
/// 作成したファイルのパス
pub(crate) fn write_file(root: &Path, relative_path: &str, content: &str) -> PathBuf {
    let path = root.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// テスト用のプロジェクト構成に合わせた設定を作成する
///
/// `root/locales/{ja,en}.json` をカタログ、`root/src` を検索対象とする
pub(crate) fn project_settings(root: &Path) -> Settings {
    Settings {
        source_catalog: root.join("locales/ja.json"),
        target_catalog: root.join("locales/en.json"),
        search_directories: vec![root.join("src")],
        project_root: Some(root.to_path_buf()),
        ..Settings::default()
    }
}

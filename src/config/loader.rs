//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    Settings,
};

/// 設定ファイル名（作業ディレクトリで自動検出される）
pub const CONFIG_FILE_NAME: &str = ".i18n-tools.json";

/// ディレクトリから設定を読み込む
///
/// `.i18n-tools.json` ファイルを探して読み込む
///
/// # Arguments
/// * `directory` - 設定ファイルを探すディレクトリ
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
pub(super) fn load_from_directory(directory: &Path) -> Result<Option<Settings>, ConfigError> {
    let config_path = directory.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    load_from_file(&config_path).map(Some)
}

/// 指定されたファイルから設定を読み込む
///
/// 設定内の相対パスは設定ファイルのディレクトリを基準に解決される
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub(super) fn load_from_file(config_path: &Path) -> Result<Settings, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)?;
    let mut settings: Settings = serde_json::from_str(&content)?;

    if let Some(base) = config_path.parent() {
        settings.resolve_paths(base);
    }

    Ok(settings)
}

/// 設定を読み込む
///
/// 明示的な設定ファイルが指定されていればそれを、なければ `working_dir` の
/// `.i18n-tools.json` を、どちらもなければデフォルト値を使う。
/// バリデーションはコマンドライン引数の上書き後に呼び出し側で行う。
pub fn load_settings(
    config_path: Option<&Path>,
    working_dir: &Path,
) -> Result<Settings, ConfigError> {
    let settings = match config_path {
        Some(path) => load_from_file(path)?,
        None => load_from_directory(working_dir)?.unwrap_or_else(|| {
            tracing::debug!("Using default settings");
            Settings::default()
        }),
    };

    tracing::debug!("Settings loaded: {:?}", settings);
    Ok(settings)
}

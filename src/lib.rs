//! i18n-catalog-tools
//!
//! JavaScript/TypeScript プロジェクトの翻訳カタログ（JSON）を保守するためのツール群
//!
//! - `check-i18n-usage`: 2 つのロケールのキーの一致確認と未使用キーの検出
//! - `remove-i18n-keys`: 指定したキーを両方のカタログから削除し、空になったオブジェクトを整理

pub mod audit;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod removal;
pub mod report;
pub mod usage;

#[cfg(test)]
mod test_utils;

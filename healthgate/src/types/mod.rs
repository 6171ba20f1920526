//! 型定義モジュール
//!
//! プローブのチェック結果・レスポンスの型定義を提供

/// ヘルスチェック関連の型定義
pub mod health;

pub use health::{CheckResult, ReadinessChecks, ReadinessReport};

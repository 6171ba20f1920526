//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! 依存サービスのチェックで発生したエラーはHTTP層へ伝播させず、
//! `ProbeError::check_result()` で [`CheckResult`] に変換してレスポンスに載せる。

use crate::types::health::CheckResult;
use std::time::Duration;
use thiserror::Error;

/// 依存サービスチェックのエラー型
#[derive(Debug, Error)]
pub enum ProbeError {
    /// 接続設定が不正（URLの解析失敗など）
    #[error("Misconfigured dependency: {0}")]
    Misconfigured(String),

    /// 接続プールがクローズ済み
    #[error("Connection pool is closed")]
    Closed,

    /// データベースエラー
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// キャッシュエラー
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// 制限時間内に応答がない
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// 呼び出し元がキャンセルした
    #[error("Check cancelled")]
    Cancelled,
}

impl ProbeError {
    /// エラーをチェック結果に変換する
    ///
    /// 接続ハンドル自体が得られない場合は `error`、
    /// 往復通信が失敗した場合は `disconnected` になる。
    pub fn check_result(&self) -> CheckResult {
        match self {
            Self::Misconfigured(_) | Self::Closed => CheckResult::Error,
            Self::Database(_) | Self::Cache(_) | Self::Timeout(_) | Self::Cancelled => {
                CheckResult::Disconnected
            }
        }
    }
}

/// 設定読み込みのエラー型
#[derive(Debug, Error)]
pub enum ConfigError {
    /// ベースパスが不正
    #[error("Invalid base path: {0}")]
    InvalidBasePath(String),
}

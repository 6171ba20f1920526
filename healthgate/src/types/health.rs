//! ヘルスチェック型定義
//!
//! 依存サービスごとのチェック結果とプローブレスポンスの型

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// 依存サービス1件分のチェック結果
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CheckResult {
    /// 疎通確認に成功
    Ok,
    /// 疎通確認に失敗（タイムアウト・キャンセル含む）
    Disconnected,
    /// 利用可能な接続ハンドルを取得できない
    Error,
    /// 依存サービスが設定されていない
    NotConfigured,
}

impl CheckResult {
    /// readiness を落とす結果かどうか
    ///
    /// `NotConfigured` は任意依存の不在であり失敗として扱わない。
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Disconnected | Self::Error)
    }

    /// ワイヤ表現のラベル
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Disconnected => "disconnected",
            Self::Error => "error",
            Self::NotConfigured => "not_configured",
        }
    }
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 依存サービスごとのチェック結果
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadinessChecks {
    /// データベース
    pub database: CheckResult,
    /// キャッシュ（Redis）
    pub redis: CheckResult,
}

impl ReadinessChecks {
    fn iter(&self) -> impl Iterator<Item = CheckResult> {
        [self.database, self.redis].into_iter()
    }
}

/// 1リクエスト分のreadiness判定結果
///
/// リクエストごとに生成され、レスポンス送信後に破棄される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessReport {
    /// 依存サービスごとの結果
    pub checks: ReadinessChecks,
}

impl ReadinessReport {
    /// チェック結果からレポートを作成
    pub fn new(database: CheckResult, redis: CheckResult) -> Self {
        Self {
            checks: ReadinessChecks { database, redis },
        }
    }

    /// 設定済みの依存サービスがすべて `ok` の場合のみ true
    pub fn is_ready(&self) -> bool {
        !self.checks.iter().any(CheckResult::is_failure)
    }

    /// readiness に対応するHTTPステータス（200 / 503）
    pub fn status_code(&self) -> StatusCode {
        if self.is_ready() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }

    /// レスポンスボディへ変換
    pub fn to_response(&self) -> ReadinessResponse {
        ReadinessResponse {
            status: if self.is_ready() {
                ReadinessStatus::Ready
            } else {
                ReadinessStatus::NotReady
            },
            checks: self.checks,
        }
    }
}

/// readiness レスポンスのステータス
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    /// トラフィック受付可能
    Ready,
    /// トラフィック受付不可
    NotReady,
}

/// GET /health/ready のレスポンスボディ
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadinessResponse {
    /// 全体のステータス
    pub status: ReadinessStatus,
    /// 依存サービスごとの結果
    pub checks: ReadinessChecks,
}

/// liveness レスポンスのステータス
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LivenessStatus {
    /// プロセス稼働中
    Alive,
}

/// GET /health/live のレスポンスボディ
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LivenessResponse {
    /// 常に `alive`
    pub status: LivenessStatus,
}

impl Default for LivenessResponse {
    fn default() -> Self {
        Self {
            status: LivenessStatus::Alive,
        }
    }
}

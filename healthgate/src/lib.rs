//! healthgate
//!
//! オーケストレーター向けのliveness / readinessプローブを提供するサーバー

#![warn(missing_docs)]

/// 共通定義（エラー型）
pub mod common;

/// REST APIハンドラー
pub mod api;

/// readiness判定（依存サービスの疎通確認と集約）
pub mod health;

/// データベース接続
pub mod db;

/// キャッシュ（Redis）接続
pub mod cache;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// CLIインターフェース
pub mod cli;

/// 型定義
pub mod types;

/// axumサーバー起動
pub mod server;

/// Shutdown controller
pub mod shutdown;

/// アプリケーション状態
///
/// 起動時に一度だけ構築され、リクエスト間で不変のまま共有される。
#[derive(Clone)]
pub struct AppState {
    /// readinessチェッカー
    pub readiness: health::ReadinessChecker,
    /// Cooperative shutdown controller
    pub shutdown: shutdown::ShutdownController,
}

impl AppState {
    /// チェッカーから状態を作成
    pub fn new(readiness: health::ReadinessChecker) -> Self {
        Self {
            readiness,
            shutdown: shutdown::ShutdownController::default(),
        }
    }
}

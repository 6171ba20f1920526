//! ロギング初期化
//!
//! `HEALTHGATE_LOG_LEVEL`（旧: `RUST_LOG`）でフィルタを指定する。
//! 未設定または解析できない場合は `info` を使う。

use crate::config::get_env_with_fallback_or;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// ログフィルタ文字列からフィルタを作成
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// tracingサブスクライバを初期化する
///
/// 二重に初期化された場合はエラーを返す。
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directive = get_env_with_fallback_or("HEALTHGATE_LOG_LEVEL", "RUST_LOG", DEFAULT_FILTER);

    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_env_filter(build_filter(&directive))
        .try_init()?;

    tracing::debug!(filter = %directive, "Logging initialized");
    Ok(())
}

//! ヘルスチェック
//!
//! liveness / readiness プローブの判定ロジック
//!
//! readinessは設定済みの依存サービス（データベース・キャッシュ）に対して
//! リクエストごとに制限時間付きの疎通確認を行い、1つの真偽値に集約する。
//! 過去の結果はキャッシュしない。

pub mod probe;
pub mod readiness;

pub use probe::{DependencyProbe, MisconfiguredProbe};
pub use readiness::{DependencyHandle, ReadinessChecker, CHECK_TIMEOUT_SECS};

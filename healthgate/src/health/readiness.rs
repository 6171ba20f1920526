//! readiness集約
//!
//! 設定済みの依存サービスを制限時間内に並列チェックし、
//! サービス全体がトラフィックを受け付けられるかを判定する。

use super::probe::DependencyProbe;
use crate::common::error::ProbeError;
use crate::types::health::{CheckResult, ReadinessReport};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// 1回のreadinessチェックの制限時間（秒）
pub const CHECK_TIMEOUT_SECS: u64 = 5;

/// 起動時に一度だけ作成される依存サービスのハンドル
pub type DependencyHandle = Arc<dyn DependencyProbe>;

/// readinessチェッカー
///
/// 依存サービスのハンドルは起動後に変更されないため、
/// 同時に実行されるチェック間でロックは不要。
#[derive(Clone)]
pub struct ReadinessChecker {
    /// データベース（未設定なら `None`）
    database: Option<DependencyHandle>,
    /// キャッシュ（未設定なら `None`）
    cache: Option<DependencyHandle>,
    /// チェック全体の制限時間
    timeout: Duration,
}

impl ReadinessChecker {
    /// 新しいチェッカーを作成
    pub fn new(database: Option<DependencyHandle>, cache: Option<DependencyHandle>) -> Self {
        Self {
            database,
            cache,
            timeout: Duration::from_secs(CHECK_TIMEOUT_SECS),
        }
    }

    /// 制限時間を設定
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 制限時間
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 依存サービスをチェックしてレポートを作成
    ///
    /// `parent` から子スコープを派生させ、制限時間で打ち切る。
    /// 親がキャンセルされると実行中の往復通信も即座に打ち切られ、`disconnected` になる。
    /// どの失敗もエラーとして返さず、必ずレポートを返す。
    pub async fn check(&self, parent: &CancellationToken) -> ReadinessReport {
        let scope = parent.child_token();
        let deadline = Instant::now() + self.timeout;

        let (database, redis) = tokio::join!(
            check_dependency("database", self.database.as_deref(), &scope, deadline),
            check_dependency("redis", self.cache.as_deref(), &scope, deadline),
        );
        scope.cancel();

        ReadinessReport::new(database, redis)
    }
}

async fn check_dependency(
    name: &'static str,
    probe: Option<&dyn DependencyProbe>,
    scope: &CancellationToken,
    deadline: Instant,
) -> CheckResult {
    let Some(probe) = probe else {
        return CheckResult::NotConfigured;
    };

    let outcome = match probe.ensure_handle() {
        Ok(()) => bounded_ping(probe, scope, deadline).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => {
            debug!(dependency = name, "Dependency check passed");
            CheckResult::Ok
        }
        Err(e) => {
            let result = e.check_result();
            warn!(dependency = name, result = %result, error = %e, "Dependency check failed");
            result
        }
    }
}

async fn bounded_ping(
    probe: &dyn DependencyProbe,
    scope: &CancellationToken,
    deadline: Instant,
) -> Result<(), ProbeError> {
    let budget = deadline.saturating_duration_since(Instant::now());
    tokio::select! {
        biased;
        _ = scope.cancelled() => Err(ProbeError::Cancelled),
        res = tokio::time::timeout_at(deadline, probe.ping()) => match res {
            Ok(ping) => ping,
            Err(_) => Err(ProbeError::Timeout(budget)),
        },
    }
}

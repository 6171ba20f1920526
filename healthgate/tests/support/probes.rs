use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use healthgate::common::error::ProbeError;
use healthgate::health::{DependencyHandle, DependencyProbe, MisconfiguredProbe};

/// テスト用の依存サービスの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Backend {
    /// 未設定
    Absent,
    /// 正常
    Healthy,
    /// 到達不能
    Unreachable,
    /// 応答しない
    Hanging,
    /// 設定不正
    Misconfigured,
}

impl Backend {
    /// 状態に対応するハンドルを作成する
    pub fn handle(self) -> Option<DependencyHandle> {
        match self {
            Backend::Absent => None,
            Backend::Healthy => Some(Arc::new(FakeProbe::new(Behavior::Pong))),
            Backend::Unreachable => Some(Arc::new(FakeProbe::new(Behavior::Refuse))),
            Backend::Hanging => Some(Arc::new(FakeProbe::new(Behavior::Hang))),
            Backend::Misconfigured => Some(Arc::new(MisconfiguredProbe::new("invalid url"))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum Behavior {
    Pong,
    Refuse,
    Hang,
}

/// 呼び出し回数を記録するフェイク依存サービス
pub struct FakeProbe {
    behavior: Behavior,
    pings: AtomicUsize,
}

#[allow(dead_code)]
impl FakeProbe {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            pings: AtomicUsize::new(0),
        }
    }

    /// pingが呼ばれた回数
    pub fn pings(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DependencyProbe for FakeProbe {
    async fn ping(&self) -> Result<(), ProbeError> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::Pong => Ok(()),
            Behavior::Refuse => Err(ProbeError::Database(sqlx::Error::PoolTimedOut)),
            Behavior::Hang => std::future::pending().await,
        }
    }
}

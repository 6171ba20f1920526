//! 依存サービスプローブ
//!
//! データベース・キャッシュなど、readiness判定の対象となる依存サービスを抽象化する。

use crate::common::error::ProbeError;
use async_trait::async_trait;

/// readiness判定の対象となる依存サービス
///
/// 実装は複数リクエストから同時に呼ばれても安全である必要がある。
#[async_trait]
pub trait DependencyProbe: Send + Sync {
    /// 利用可能な接続ハンドルを取得できるか確認
    ///
    /// ここで失敗した場合は往復通信を行わず `error` として扱う。
    fn ensure_handle(&self) -> Result<(), ProbeError> {
        Ok(())
    }

    /// 最小限の往復通信で疎通を確認
    ///
    /// 制限時間とキャンセルは呼び出し側が管理するため、
    /// 実装側でタイムアウトを設ける必要はない。
    async fn ping(&self) -> Result<(), ProbeError>;
}

/// 設定が不正で接続ハンドルを作成できなかった依存サービス
///
/// 起動失敗にせず、チェックのたびに `error` を報告する。
#[derive(Debug, Clone)]
pub struct MisconfiguredProbe {
    reason: String,
}

impl MisconfiguredProbe {
    /// 原因を指定して作成
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl DependencyProbe for MisconfiguredProbe {
    fn ensure_handle(&self) -> Result<(), ProbeError> {
        Err(ProbeError::Misconfigured(self.reason.clone()))
    }

    async fn ping(&self) -> Result<(), ProbeError> {
        Err(ProbeError::Misconfigured(self.reason.clone()))
    }
}

//! キャッシュ（Redis）接続
//!
//! チェックごとに多重化接続を1本だけ開き、`PING` を1往復送る。
//! 再接続は行わないため、接続拒否はタイムアウトを待たずに失敗する。

use crate::common::error::ProbeError;
use crate::health::DependencyProbe;
use async_trait::async_trait;

/// Redisキャッシュ
pub struct RedisCache {
    client: redis::Client,
}

impl RedisCache {
    /// URLからクライアントを作成する（接続はしない）
    pub fn open(redis_url: &str) -> Result<Self, ProbeError> {
        let client =
            redis::Client::open(redis_url).map_err(|e| ProbeError::Misconfigured(e.to_string()))?;
        Ok(Self { client })
    }
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 接続情報には認証情報が含まれうるため出力しない
        f.debug_struct("RedisCache").finish_non_exhaustive()
    }
}

#[async_trait]
impl DependencyProbe for RedisCache {
    async fn ping(&self) -> Result<(), ProbeError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

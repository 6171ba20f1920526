//! データベースアクセス層
//!
//! readiness判定用のデータベース接続プール。
//! URLのスキームで SQLite / PostgreSQL を切り替える。
//!
//! プールの `acquire()` は接続拒否時に `acquire_timeout` まで再接続を繰り返すため使わない。
//! アイドル接続があればそれを使い、なければ1回だけ直接接続する。

use crate::common::error::ProbeError;
use crate::health::DependencyProbe;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Connection, Database, PgPool, Pool, SqlitePool};
use std::time::Duration;
use tracing::debug;

/// プールの最大接続数
const MAX_CONNECTIONS: u32 = 5;

/// 接続取得のタイムアウト（秒）
const ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// データベース接続プール
#[derive(Debug, Clone)]
pub enum DatabasePool {
    /// SQLite
    Sqlite(SqlitePool),
    /// PostgreSQL
    Postgres(PgPool),
}

impl DatabasePool {
    /// 接続プールを作成する（接続は最初の利用時まで遅延）
    ///
    /// 起動時にデータベースへ到達できなくてもプロセスは起動し、
    /// 到達不能な状態はreadinessで `disconnected` として報告される。
    /// URLが解析できない場合のみエラーを返す。
    pub fn connect_lazy(database_url: &str) -> Result<Self, ProbeError> {
        let acquire_timeout = Duration::from_secs(ACQUIRE_TIMEOUT_SECS);

        if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
            PgPoolOptions::new()
                .max_connections(MAX_CONNECTIONS)
                .acquire_timeout(acquire_timeout)
                .connect_lazy(database_url)
                .map(Self::Postgres)
                .map_err(|e| ProbeError::Misconfigured(e.to_string()))
        } else if database_url.starts_with("sqlite:") {
            SqlitePoolOptions::new()
                .max_connections(MAX_CONNECTIONS)
                .acquire_timeout(acquire_timeout)
                .connect_lazy(database_url)
                .map(Self::Sqlite)
                .map_err(|e| ProbeError::Misconfigured(e.to_string()))
        } else {
            // URLには認証情報が含まれうるためスキーム部分のみ返す
            let scheme = database_url.split(':').next().unwrap_or_default();
            Err(ProbeError::Misconfigured(format!(
                "unsupported database scheme: {:?}",
                scheme
            )))
        }
    }

    /// データベースの種類
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::Postgres(_) => "postgres",
        }
    }

    /// プールをクローズする
    pub async fn close(&self) {
        match self {
            Self::Sqlite(pool) => pool.close().await,
            Self::Postgres(pool) => pool.close().await,
        }
    }
}

#[async_trait]
impl DependencyProbe for DatabasePool {
    fn ensure_handle(&self) -> Result<(), ProbeError> {
        let closed = match self {
            Self::Sqlite(pool) => pool.is_closed(),
            Self::Postgres(pool) => pool.is_closed(),
        };
        if closed {
            Err(ProbeError::Closed)
        } else {
            Ok(())
        }
    }

    async fn ping(&self) -> Result<(), ProbeError> {
        match self {
            Self::Sqlite(pool) => ping_once(pool).await,
            Self::Postgres(pool) => ping_once(pool).await,
        }
    }
}

/// 再試行なしで1往復だけ疎通確認する
async fn ping_once<DB: Database>(pool: &Pool<DB>) -> Result<(), ProbeError> {
    if let Some(mut conn) = pool.try_acquire() {
        conn.ping().await?;
        return Ok(());
    }

    let options = pool.connect_options();
    let mut conn = DB::Connection::connect_with(&*options).await?;
    conn.ping().await?;
    if let Err(e) = conn.close().await {
        debug!(error = %e, "Failed to close readiness connection");
    }
    Ok(())
}

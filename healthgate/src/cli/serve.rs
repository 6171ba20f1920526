//! serve サブコマンド
//!
//! プローブサーバーを起動します。未指定の項目は環境変数から読み込みます。

use crate::common::error::ConfigError;
use crate::config::{BasePath, ServerConfig};
use clap::Args;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Path prefix to expose the probes under, in addition to the root
    #[arg(short, long)]
    pub base_path: Option<String>,
}

impl ServeArgs {
    /// 環境変数の設定に引数を上書きしたサーバー設定
    pub fn resolve(&self, mut config: ServerConfig) -> Result<ServerConfig, ConfigError> {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(base_path) = &self.base_path {
            config.base_path = BasePath::parse(base_path)?;
        }
        Ok(config)
    }
}

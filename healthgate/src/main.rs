//! healthgate Server Entry Point

use clap::Parser;
use healthgate::cache::RedisCache;
use healthgate::cli::{serve::ServeArgs, Cli, Commands};
use healthgate::config::{DependencyConfig, ServerConfig};
use healthgate::db::DatabasePool;
use healthgate::health::{DependencyHandle, MisconfiguredProbe, ReadinessChecker};
use healthgate::{logging, server, AppState};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Probe(args)) => match healthgate::cli::probe::execute(&args).await {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Some(Commands::Serve(args)) => run(args).await,
        None => run(ServeArgs::default()).await,
    }
}

async fn run(args: ServeArgs) {
    logging::init().expect("failed to initialize logging");

    if let Err(e) = run_server(args).await {
        tracing::error!("Server error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    info!("healthgate v{}", env!("CARGO_PKG_VERSION"));

    let server_config = args.resolve(ServerConfig::from_env()?)?;
    let dependencies = DependencyConfig::from_env();

    let database = dependencies.database_url.as_deref().map(open_database);
    let cache = dependencies.redis_url.as_deref().map(open_cache);

    let readiness =
        ReadinessChecker::new(database, cache).with_timeout(dependencies.check_timeout);
    let state = AppState::new(readiness);

    server::run(
        state,
        &server_config.bind_addr(),
        &server_config.base_path,
    )
    .await?;
    Ok(())
}

/// データベースのハンドルを作成（不正な設定は起動失敗にせず `error` として報告）
fn open_database(database_url: &str) -> DependencyHandle {
    match DatabasePool::connect_lazy(database_url) {
        Ok(pool) => {
            info!(kind = pool.kind(), "Database configured");
            Arc::new(pool)
        }
        Err(e) => {
            warn!(error = %e, "Database is misconfigured; readiness will report error");
            Arc::new(MisconfiguredProbe::new(e.to_string()))
        }
    }
}

/// キャッシュのハンドルを作成（不正な設定は起動失敗にせず `error` として報告）
fn open_cache(redis_url: &str) -> DependencyHandle {
    match RedisCache::open(redis_url) {
        Ok(cache) => {
            info!("Redis configured");
            Arc::new(cache)
        }
        Err(e) => {
            warn!(error = %e, "Redis is misconfigured; readiness will report error");
            Arc::new(MisconfiguredProbe::new(e.to_string()))
        }
    }
}

//! CLI module for healthgate
//!
//! Provides the command-line interface for running and querying the probe server.

pub mod probe;
pub mod serve;

use clap::{Parser, Subcommand};

/// healthgate - Liveness and readiness probes for orchestrated services
#[derive(Parser, Debug)]
#[command(name = "healthgate")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    HEALTHGATE_HOST                 Bind address (default: 0.0.0.0)
    HEALTHGATE_PORT                 Listen port (default: 8080)
    HEALTHGATE_BASE_PATH            Ingress prefix (alias: SERVER_BASE_PATH)
    HEALTHGATE_DATABASE_URL         sqlite: or postgres:// URL (alias: DATABASE_URL)
    HEALTHGATE_REDIS_URL            redis:// URL (alias: REDIS_URL)
    HEALTHGATE_CHECK_TIMEOUT_SECS   Readiness check budget (default: 5)
    HEALTHGATE_LOG_LEVEL            Log filter (alias: RUST_LOG, default: info)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the probe server
    Serve(serve::ServeArgs),
    /// Query a running server once and exit with its result
    Probe(probe::ProbeArgs),
}

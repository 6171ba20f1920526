//! probe subcommand
//!
//! Queries a running server once and reports the result through the exit code,
//! for orchestrators that only support exec probes.

use clap::Args;
use std::time::Duration;

/// Arguments for the probe subcommand
#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// Base URL of the running server
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    pub url: String,

    /// Probe path to request
    #[arg(short, long, default_value = "/health/ready")]
    pub path: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "5")]
    pub timeout_secs: u64,
}

impl ProbeArgs {
    fn target(&self) -> String {
        let base = self.url.trim_end_matches('/');
        if self.path.starts_with('/') {
            format!("{}{}", base, self.path)
        } else {
            format!("{}/{}", base, self.path)
        }
    }
}

/// Execute the probe command
///
/// Returns `Ok(true)` on a 2xx response and `Ok(false)` on any other status.
/// Connection failures are returned as errors.
pub async fn execute(args: &ProbeArgs) -> Result<bool, anyhow::Error> {
    let target = args.target();
    let response = reqwest::Client::new()
        .get(&target)
        .timeout(Duration::from_secs(args.timeout_secs))
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    println!("{} {}", status.as_u16(), body);

    Ok(status.is_success())
}

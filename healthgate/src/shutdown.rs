//! Cooperative shutdown controller.
//!
//! `server::run` combines this with OS signals to perform graceful shutdown.
//! It is also the root cancellation scope for readiness checks: once shutdown
//! starts, in-flight checks stop waiting on their dependencies.

use tokio_util::sync::CancellationToken;

/// Cooperative shutdown signal used for graceful exit.
#[derive(Clone, Debug, Default)]
pub struct ShutdownController {
    token: CancellationToken,
}

impl ShutdownController {
    /// Returns true if shutdown has been requested.
    pub fn is_shutdown_requested(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Request shutdown and wake all waiters.
    pub fn request_shutdown(&self) {
        self.token.cancel();
    }

    /// Wait until shutdown is requested.
    pub async fn wait(&self) {
        self.token.cancelled().await;
    }

    /// Token cancelled when shutdown is requested.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

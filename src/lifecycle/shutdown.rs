//! Signal handling for graceful shutdown
//!
//! Whatever path ends the process must run through the click-loop stop
//! in main, so an interrupt can never leave a clicking worker behind.

use tracing::debug;

/// Handles shutdown signals (SIGTERM, SIGINT / ctrl-c).
pub struct ShutdownSignal;

impl ShutdownSignal {
    /// Create a new shutdown signal handler
    pub fn new() -> Self {
        Self
    }

    /// Wait for a shutdown signal
    #[cfg(unix)]
    pub async fn wait(&self) {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())
            .expect("failed to register SIGTERM handler");
        let mut sigint = signal(SignalKind::interrupt())
            .expect("failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                debug!("received SIGTERM");
            }
            _ = sigint.recv() => {
                debug!("received SIGINT");
            }
        }
    }

    /// Wait for a shutdown signal
    #[cfg(not(unix))]
    pub async fn wait(&self) {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to register ctrl-c handler");
        debug!("received ctrl-c");
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

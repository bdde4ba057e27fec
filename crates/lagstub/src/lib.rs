//! Shared bootstrap for the stub server binaries.
//!
//! Each binary is one deployment variant: it initializes logging, binds
//! its fixed port, and serves until killed. A bind failure is logged and
//! turns into a non-zero exit status with no retry.

use lagstub_core::{Server, VariantConfig};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Initialize logging; `RUST_LOG` overrides the `info` default
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Bind and serve one variant; only returns on a fatal error
pub async fn run(config: VariantConfig) -> ExitCode {
    let server = match Server::bind(&config) {
        Ok(server) => server,
        Err(err) => {
            error!(variant = config.name, error = %err, "failed to acquire listening socket");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = server.serve().await {
        error!(variant = config.name, error = %err, "serve failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

//! Error types for lagstub-core

use std::net::SocketAddr;
use thiserror::Error;

/// Result type alias for lagstub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the stub server
///
/// Failing to acquire the listening socket is the only fatal error class;
/// everything past bind is either infallible or handled per connection.
#[derive(Debug, Error)]
pub enum Error {
    /// Listening socket could not be acquired
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// IO error from the accept loop
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

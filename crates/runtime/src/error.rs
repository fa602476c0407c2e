//! Error types for service startup and the serve loop.

use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Tracing subscriber could not be installed (bad filter, already installed)
    #[error("Logging error: {0}")]
    Logging(String),

    /// Listener failed to bind
    #[error("Bind error on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// IO errors while serving
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

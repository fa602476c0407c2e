use crate::error::Result;
use axum::Router;
use std::net::{Ipv4Addr, SocketAddr};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Resolved settings for one service process.
///
/// Binaries build this from their own `clap` CLI (each binary has its own env var prefix).
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub bind: SocketAddr,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl ServeConfig {
    /// Install logging, bind, and serve `router` until a shutdown signal arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if logging cannot be initialized, the address cannot be bound, or the
    /// server fails while running.
    pub async fn launch(self, service: &'static str, router: Router) -> Result<()> {
        crate::logging::init(&self.log_level, self.log_format)?;
        crate::serve::run(service, self.bind, router).await
    }
}

/// `0.0.0.0:<port>`.
#[must_use]
pub fn all_interfaces(port: u16) -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum as _;

    #[test]
    fn all_interfaces_binds_unspecified() {
        let addr = all_interfaces(5000);
        assert_eq!(addr.to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!(LogFormat::from_str("json", true).ok(), Some(LogFormat::Json));
        assert_eq!(LogFormat::from_str("TEXT", true).ok(), Some(LogFormat::Text));
        assert!(LogFormat::from_str("yaml", true).is_err());
    }
}

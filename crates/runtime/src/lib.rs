//! Process plumbing shared by the arithmetic service binaries.
//!
//! Each binary owns its routes; this crate owns everything around them:
//! - `config`: the bind address / log settings every binary accepts
//! - `logging`: `tracing` subscriber setup
//! - `serve`: listener binding and the graceful-shutdown serve loop

pub mod config;
pub mod error;
pub mod logging;
pub mod serve;

pub use config::{LogFormat, ServeConfig, all_interfaces};
pub use error::{Result, RuntimeError};

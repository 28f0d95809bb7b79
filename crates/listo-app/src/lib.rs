//! Application layer for listo: configuration, logging setup and the
//! [`ListService`] state container a view layer drives.

/// Configuration loading.
pub mod config;
/// Tracing subscriber setup.
pub mod logging;
pub mod service;

pub use config::{DisplayConfig, ListoConfig, StorageConfig};
pub use logging::install_tracing;
pub use service::{ListCard, ListService};

//! Bootstrap: configuration, tracing and dependency wiring.

pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_or_default};
pub use runtime::{AppRuntime, UseCases};
pub use wiring::wire_dependencies;

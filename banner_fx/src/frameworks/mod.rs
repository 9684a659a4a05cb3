// Frameworks layer: runtime bootstrap, config, and the tokio tasks behind each component.

pub mod config;
pub mod runtime;
pub mod scheduler;

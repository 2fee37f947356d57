// src/lib.rs
//! Alias Registry
//! Lets a component system refer to one entity under many names. Aliases
//! resolve to a single canonical name and the alias graph never contains a cycle.

pub mod config;
pub mod error;
pub mod guard;
pub mod registry;
pub mod rename;
pub mod resolve;

#[cfg(feature = "pyo3")]
pub mod py;

pub use config::RegistryConfig;
pub use error::{AliasError, RenameError};
pub use registry::AliasRegistry;
pub use rename::ValueResolver;

/// Install a `fmt` subscriber for the registry's tracing events.
/// Does nothing if a global subscriber is already set.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().try_init();
}

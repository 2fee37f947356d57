//! Python bindings, split into submodules.
#![allow(non_local_definitions)]

pub mod registry;
pub mod utils;
pub mod wrappers;

// re-export a few helpers for external callers (tests, build scripts, etc.)
pub use registry::PyAliasRegistry;
pub use wrappers::make_module;

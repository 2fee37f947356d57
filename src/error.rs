// src/error.rs
//! Error types for alias registration, removal and rename passes.

/// Failures surfaced by [`AliasRegistry`](crate::AliasRegistry) operations.
///
/// Every variant is detected before the shared mapping is touched, so a
/// returned error always means the registry is in its pre-call state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AliasError {
    /// A blank name or alias was supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The alias is already bound to a different name and may not be rebound.
    #[error(
        "cannot define alias '{alias}' for name '{name}': it is already registered for name '{existing}'"
    )]
    AliasConflict {
        alias: String,
        name: String,
        existing: String,
    },

    /// Binding the alias would close a loop in the alias graph.
    #[error(
        "cannot register alias '{alias}' for name '{name}': circular reference, '{name}' is a direct or indirect alias for '{alias}' already"
    )]
    CircularAlias { alias: String, name: String },

    /// `remove` was called for an alias that is not registered.
    #[error("no alias '{0}' registered")]
    UnknownAlias(String),
}

/// Failure of a rename pass driven by a fallible resolver.
#[derive(Debug, thiserror::Error)]
pub enum RenameError<E> {
    #[error(transparent)]
    Alias(#[from] AliasError),

    /// The resolver itself failed; nothing was committed.
    #[error("value resolver failed: {0}")]
    Resolver(E),
}

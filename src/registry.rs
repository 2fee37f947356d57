// src/registry.rs
//! Alias registry: maps aliases to canonical names without ever forming a cycle.

use crate::config::RegistryConfig;
use crate::error::{AliasError, RenameError};
use crate::guard::{self, AliasLookup};
use crate::rename::{self, ValueResolver};
use crate::resolve;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Concurrent alias -> canonical name registry.
///
/// Point reads (`is_alias`, `canonical_name`, `has_alias`) go straight to the
/// map. Anything that reasons about the graph as a whole runs under `lock`:
/// mutations exclusively, transitive queries shared.
pub struct AliasRegistry {
    /// Mapping of alias to the name it is bound to.
    aliases: DashMap<String, String>,
    lock: RwLock<()>,
    config: RegistryConfig,
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasRegistry {
    /// Create a new, empty registry with the default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a new, empty registry using `config`.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            aliases: DashMap::new(),
            lock: RwLock::new(()),
            config,
        }
    }

    /// The policy this registry was built with.
    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Whether an existing alias may be rebound to a different name.
    pub fn allow_overriding(&self) -> bool {
        self.config.allow_overriding
    }

    /// Bind `alias` to `name`.
    ///
    /// Binding a name to itself removes any existing entry for it. Re-binding
    /// an identical pair is a no-op.
    pub fn register(&self, name: &str, alias: &str) -> Result<(), AliasError> {
        if name.trim().is_empty() {
            return Err(AliasError::InvalidArgument("'name' must not be empty"));
        }
        if alias.trim().is_empty() {
            return Err(AliasError::InvalidArgument("'alias' must not be empty"));
        }

        let _guard = self.lock.write();
        if alias == name {
            self.aliases.remove(alias);
            tracing::debug!(alias, "alias definition ignored since it points to same name");
            return Ok(());
        }

        if let Some(existing) = self.aliases.target(alias) {
            if existing == name {
                return Ok(());
            }
            if !self.allow_overriding() {
                return Err(AliasError::AliasConflict {
                    alias: alias.to_string(),
                    name: name.to_string(),
                    existing,
                });
            }
            tracing::debug!(alias, from = %existing, to = name, "overriding alias definition");
        }

        guard::check_circle(&self.aliases, name, alias)?;
        self.aliases.insert(alias.to_string(), name.to_string());
        tracing::trace!(alias, name, "alias registered");
        Ok(())
    }

    /// Remove a registered alias.
    pub fn remove(&self, alias: &str) -> Result<(), AliasError> {
        let _guard = self.lock.write();
        match self.aliases.remove(alias) {
            Some((_, name)) => {
                tracing::trace!(alias, name = %name, "alias removed");
                Ok(())
            }
            None => Err(AliasError::UnknownAlias(alias.to_string())),
        }
    }

    /// True if `name` is currently registered as an alias.
    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// True if `alias` resolves to `name`, directly or transitively.
    pub fn has_alias(&self, name: &str, alias: &str) -> bool {
        guard::has_alias(&self.aliases, name, alias)
    }

    /// Resolve `name` through the alias chain to its canonical name.
    /// Names that are not aliases come back unchanged.
    pub fn canonical_name(&self, name: &str) -> String {
        resolve::canonical_name(&self.aliases, name)
    }

    /// All aliases that resolve to `name`, including transitive ones.
    pub fn get_aliases(&self, name: &str) -> Vec<String> {
        let _guard = self.lock.read();
        let entries: Vec<(String, String)> = self
            .aliases
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();
        resolve::collect_aliases(entries.iter().map(|(a, n)| (a.as_str(), n.as_str())), name)
    }

    /// Aliases bound directly to `name`.
    pub fn aliases_of(&self, name: &str) -> Vec<String> {
        let _guard = self.lock.read();
        self.aliases
            .iter()
            .filter(|e| e.value() == name)
            .map(|e| e.key().clone())
            .collect()
    }

    /// Point-in-time copy of every alias -> name binding.
    pub fn snapshot(&self) -> HashMap<String, String> {
        let _guard = self.lock.read();
        self.copy_entries()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Rewrite every alias and target through `resolver`.
    ///
    /// Either the whole pass is committed or, on error, nothing changes.
    pub fn apply_rename<R: ValueResolver + ?Sized>(&self, resolver: &R) -> Result<(), AliasError> {
        let _guard = self.lock.write();
        let mut staged = self.copy_entries();
        rename::rewrite(&mut staged, resolver)?;
        self.commit(staged);
        Ok(())
    }

    /// [`apply_rename`](Self::apply_rename) with a resolver that can fail.
    pub fn try_apply_rename<F, E>(&self, resolve: F) -> Result<(), RenameError<E>>
    where
        F: Fn(&str) -> Result<Option<String>, E>,
    {
        let _guard = self.lock.write();
        let mut staged = self.copy_entries();
        rename::try_rewrite(&mut staged, resolve)?;
        self.commit(staged);
        Ok(())
    }

    fn copy_entries(&self) -> HashMap<String, String> {
        self.aliases
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect()
    }

    /// Replace the live mapping with `staged`. Caller holds the write lock.
    fn commit(&self, staged: HashMap<String, String>) {
        self.aliases.retain(|alias, _| staged.contains_key(alias));
        for (alias, name) in staged {
            let unchanged = self
                .aliases
                .get(&alias)
                .map_or(false, |current| *current == name);
            if !unchanged {
                self.aliases.insert(alias, name);
            }
        }
    }
}

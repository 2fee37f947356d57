// src/guard.rs
//! Cycle detection over the alias graph.
//!
//! The checks here are written against [`AliasLookup`] so they can run both
//! on the live [`DashMap`] and on the staged copy a rename pass works on.

use crate::error::AliasError;
use dashmap::DashMap;
use std::collections::{HashMap, HashSet};

/// Single-step read access to an alias -> target mapping.
pub trait AliasLookup {
    /// The name `alias` is directly bound to, if any.
    fn target(&self, alias: &str) -> Option<String>;
}

impl AliasLookup for DashMap<String, String> {
    fn target(&self, alias: &str) -> Option<String> {
        self.get(alias).map(|t| t.value().clone())
    }
}

impl AliasLookup for HashMap<String, String> {
    fn target(&self, alias: &str) -> Option<String> {
        self.get(alias).cloned()
    }
}

/// True if `alias` resolves to `name`, directly or through intermediate aliases.
///
/// Walks the chain iteratively; a repeated name ends the walk with `false`.
pub fn has_alias<M: AliasLookup + ?Sized>(map: &M, name: &str, alias: &str) -> bool {
    let mut visited: HashSet<String> = HashSet::new();
    let mut current = alias.to_string();
    while let Some(next) = map.target(&current) {
        if next == name {
            return true;
        }
        if !visited.insert(current) {
            tracing::warn!(name, alias, "alias chain revisits a name");
            return false;
        }
        current = next;
    }
    false
}

/// Reject binding `alias -> name` if `name` already resolves to `alias`.
///
/// Callers must hold the registry's write lock across this check and the
/// insert that follows it.
pub fn check_circle<M: AliasLookup + ?Sized>(
    map: &M,
    name: &str,
    alias: &str,
) -> Result<(), AliasError> {
    if has_alias(map, alias, name) {
        return Err(AliasError::CircularAlias {
            alias: alias.to_string(),
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(a, n)| (a.to_string(), n.to_string()))
            .collect()
    }

    #[test]
    fn direct_and_transitive_aliases() {
        // b -> a, c -> b
        let m = map(&[("b", "a"), ("c", "b")]);
        assert!(has_alias(&m, "a", "b"));
        assert!(has_alias(&m, "a", "c"));
        assert!(has_alias(&m, "b", "c"));
        assert!(!has_alias(&m, "c", "a"));
        assert!(!has_alias(&m, "a", "a"));
    }

    #[test]
    fn detects_direct_cycle() {
        let m = map(&[("b", "a")]);
        assert_eq!(
            check_circle(&m, "b", "a"),
            Err(AliasError::CircularAlias {
                alias: "a".into(),
                name: "b".into()
            })
        );
        assert!(check_circle(&m, "a", "c").is_ok());
    }

    #[test]
    fn detects_indirect_cycle() {
        // c -> b -> a; binding a -> c closes the loop
        let m = map(&[("b", "a"), ("c", "b")]);
        assert!(check_circle(&m, "c", "a").is_err());
    }

    #[test]
    fn corrupted_chain_terminates() {
        let m = map(&[("x", "y"), ("y", "x")]);
        assert!(!has_alias(&m, "z", "x"));
    }

    #[test]
    fn works_on_dashmap() {
        let m: DashMap<String, String> = DashMap::new();
        m.insert("b".into(), "a".into());
        assert!(has_alias(&m, "a", "b"));
        assert!(check_circle(&m, "b", "a").is_err());
    }
}

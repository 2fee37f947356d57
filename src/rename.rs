// src/rename.rs
//! Rewriting every registered pair through an external name transformation.
//!
//! A pass runs against a staged copy of the mapping. Each entry commits into
//! the staged copy, so later entries observe earlier rewrites, and the copy
//! only replaces the live mapping once the whole pass has succeeded.
//!
//! Entries are visited in lexicographic alias order. When two entries'
//! rewritten values collide the outcome still depends on that order, so
//! results are only order-independent for resolvers whose outputs never
//! collide across entries.

use crate::error::{AliasError, RenameError};
use crate::guard::check_circle;
use std::collections::HashMap;
use std::convert::Infallible;

/// Transforms a single name, or declines with `None` when the value cannot
/// be resolved.
pub trait ValueResolver {
    fn resolve(&self, value: &str) -> Option<String>;
}

impl<F> ValueResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, value: &str) -> Option<String> {
        self(value)
    }
}

/// Apply `resolver` to every entry of `staged` in place.
pub fn rewrite<R: ValueResolver + ?Sized>(
    staged: &mut HashMap<String, String>,
    resolver: &R,
) -> Result<(), AliasError> {
    try_rewrite(staged, |value| Ok::<_, Infallible>(resolver.resolve(value))).map_err(
        |e| match e {
            RenameError::Alias(e) => e,
            RenameError::Resolver(never) => match never {},
        },
    )
}

/// Fallible variant of [`rewrite`]. On error `staged` may be partially
/// rewritten and must be discarded by the caller.
pub fn try_rewrite<F, E>(
    staged: &mut HashMap<String, String>,
    resolve: F,
) -> Result<(), RenameError<E>>
where
    F: Fn(&str) -> Result<Option<String>, E>,
{
    let mut snapshot: Vec<(String, String)> = staged
        .iter()
        .map(|(alias, name)| (alias.clone(), name.clone()))
        .collect();
    snapshot.sort();

    for (alias, registered) in snapshot {
        let resolved_alias = resolve(&alias).map_err(RenameError::Resolver)?;
        let resolved_name = resolve(&registered).map_err(RenameError::Resolver)?;

        let (new_alias, new_name) = match (resolved_alias, resolved_name) {
            (Some(a), Some(n)) if a != n && !a.trim().is_empty() && !n.trim().is_empty() => (a, n),
            _ => {
                tracing::trace!(alias = %alias, "dropping unresolvable, blank or self-referencing alias");
                staged.remove(&alias);
                continue;
            }
        };

        if new_alias != alias {
            if let Some(existing) = staged.get(&new_alias) {
                if *existing == new_name {
                    // target pair already present
                    staged.remove(&alias);
                    continue;
                }
                return Err(AliasError::AliasConflict {
                    alias: new_alias,
                    name: new_name,
                    existing: existing.clone(),
                }
                .into());
            }
            check_circle(&*staged, &new_name, &new_alias)?;
            tracing::trace!(from = %alias, to = %new_alias, name = %new_name, "rewriting alias");
            staged.remove(&alias);
            staged.insert(new_alias, new_name);
        } else if registered != new_name {
            check_circle(&*staged, &new_name, &alias)?;
            tracing::trace!(alias = %alias, from = %registered, to = %new_name, "retargeting alias");
            staged.insert(alias, new_name);
        }
    }
    Ok(())
}

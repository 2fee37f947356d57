// src/resolve.rs
//! Transitive resolution: alias chains down to canonical names, and
//! canonical names back up to every alias that reaches them.

use crate::guard::AliasLookup;
use std::collections::{HashMap, HashSet};

/// Follow `name` through the mapping until it reaches a name with no
/// further binding.
///
/// Steps are independent reads, so a concurrent mutation can be observed
/// halfway through. A repeated name stops the walk at the last name seen.
pub fn canonical_name<M: AliasLookup + ?Sized>(map: &M, name: &str) -> String {
    let mut current = name.to_string();
    let mut visited: HashSet<String> = HashSet::new();
    while let Some(next) = map.target(&current) {
        if !visited.insert(current.clone()) {
            tracing::warn!(name, at = %current, "alias chain revisits a name");
            break;
        }
        current = next;
    }
    current
}

/// Every alias whose chain terminates at `name`, including transitive ones.
///
/// `entries` must be a consistent view of the mapping. Order is unspecified.
pub fn collect_aliases<'a, I>(entries: I, name: &str) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut reverse: HashMap<&str, Vec<&str>> = HashMap::new();
    for (alias, target) in entries {
        reverse.entry(target).or_default().push(alias);
    }

    let mut result = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack = vec![name];
    seen.insert(name);
    while let Some(target) = stack.pop() {
        let Some(direct) = reverse.get(target) else {
            continue;
        };
        for &alias in direct {
            if seen.insert(alias) {
                result.push(alias.to_string());
                stack.push(alias);
            }
        }
    }
    result
}

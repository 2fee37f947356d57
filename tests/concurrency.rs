mod common;

use alias_registry::{AliasError, AliasRegistry};
use std::sync::Arc;
use std::thread;

const PER_WORKER: usize = 200;

fn workers() -> usize {
    num_cpus::get().clamp(2, 8)
}

#[test]
fn disjoint_registrations_are_never_lost() {
    common::init_tracing();
    let reg = Arc::new(AliasRegistry::new());
    let n = workers();

    let handles: Vec<_> = (0..n)
        .map(|w| {
            let reg = reg.clone();
            thread::spawn(move || {
                for i in 0..PER_WORKER {
                    reg.register(&format!("name-{w}"), &format!("alias-{w}-{i}"))
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(reg.len(), n * PER_WORKER);
    for w in 0..n {
        for i in 0..PER_WORKER {
            assert!(reg.is_alias(&format!("alias-{w}-{i}")));
        }
        assert_eq!(reg.get_aliases(&format!("name-{w}")).len(), PER_WORKER);
    }
}

#[test]
fn racing_opposite_registrations_never_form_a_cycle() {
    common::init_tracing();
    for round in 0..200 {
        let reg = Arc::new(AliasRegistry::new());
        let a = format!("a{round}");
        let b = format!("b{round}");

        let left = {
            let (reg, a, b) = (reg.clone(), a.clone(), b.clone());
            thread::spawn(move || reg.register(&a, &b))
        };
        let right = {
            let (reg, a, b) = (reg.clone(), a.clone(), b.clone());
            thread::spawn(move || reg.register(&b, &a))
        };
        let results = [left.join().unwrap(), right.join().unwrap()];

        let failures = results
            .iter()
            .filter(|r| matches!(r, Err(AliasError::CircularAlias { .. })))
            .count();
        assert_eq!(failures, 1, "exactly one side must lose the race");
        assert_eq!(reg.len(), 1);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_see_terminating_chains_during_renames() {
    common::init_tracing();
    let reg = Arc::new(AliasRegistry::new());
    for i in 0..50 {
        let name = if i == 0 { "root".to_string() } else { format!("n{}", i - 1) };
        reg.register(&name, &format!("n{i}")).unwrap();
    }

    let writer = {
        let reg = reg.clone();
        tokio::task::spawn_blocking(move || {
            for round in 0..20 {
                let (from, to) = if round % 2 == 0 {
                    ("root", "base")
                } else {
                    ("base", "root")
                };
                reg.apply_rename(&|v: &str| {
                    Some(if v == from { to.to_string() } else { v.to_string() })
                })
                .unwrap();
            }
        })
    };

    let reader = {
        let reg = reg.clone();
        tokio::task::spawn_blocking(move || {
            for _ in 0..500 {
                let canonical = reg.canonical_name("n49");
                assert!(!canonical.is_empty());
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();
    assert_eq!(reg.canonical_name("n49"), "root");
    assert_eq!(reg.get_aliases("root").len(), 50);
}

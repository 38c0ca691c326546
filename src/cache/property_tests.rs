//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store's contract over arbitrary operation
//! sequences.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys, some sharing the `ns/` namespace
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9_]{1,16}".prop_map(|s| s),
        "[a-z0-9_]{0,8}".prop_map(|s| format!("ns/{}", s)),
    ]
}

/// Generates opaque payloads
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, payload: Vec<u8> },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), payload_strategy()).prop_map(|(key, payload)| CacheOp::Put { key, payload }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations, the store agrees with a plain HashMap
    // model, and the hit/miss counters match the lookups performed.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let store = CacheStore::new(TEST_TTL);
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { key, payload } => {
                    store.put(key.clone(), payload.clone());
                    model.insert(key, payload);
                }
                CacheOp::Get { key } => {
                    let found = store.get(&key);
                    prop_assert_eq!(found.as_ref(), model.get(&key), "Lookup mismatch for {}", key);
                    if found.is_some() {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                }
                CacheOp::Delete { key } => {
                    prop_assert_eq!(store.delete(&key), model.remove(&key).is_some());
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, model.len(), "Total entries mismatch");
    }

    // Storing P1 then P2 under one key leaves exactly P2.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        first in payload_strategy(),
        second in payload_strategy()
    ) {
        let store = CacheStore::new(TEST_TTL);

        store.put(key.clone(), first);
        store.put(key.clone(), second.clone());

        prop_assert_eq!(store.get(&key), Some(second));
        prop_assert_eq!(store.len(), 1);
    }

    // A prefix scan returns exactly the suffixes of the keys under the prefix.
    #[test]
    fn prop_prefix_scan_correctness(keys in prop::collection::hash_set(key_strategy(), 0..30)) {
        let store = CacheStore::new(TEST_TTL);
        for key in &keys {
            store.put(key.clone(), Vec::new());
        }

        let scanned = store.scan_prefix("ns/");
        let scanned_set: HashSet<String> = scanned.iter().cloned().collect();
        let expected: HashSet<String> = keys
            .iter()
            .filter_map(|key| key.strip_prefix("ns/"))
            .map(str::to_string)
            .collect();

        prop_assert_eq!(scanned.len(), scanned_set.len(), "Scan returned duplicates");
        prop_assert_eq!(scanned_set, expected);
    }

    // The sweep removes an entry only once its age strictly exceeds the TTL.
    #[test]
    fn prop_sweep_respects_ttl(
        ttl_ms in 1u64..10_000,
        elapsed_ms in 0u64..20_000
    ) {
        let ttl = Duration::from_millis(ttl_ms);
        let store = CacheStore::new(ttl);
        let inserted = Instant::now();
        store.put("key", b"value".to_vec());

        // put() stamps the entry a hair after `inserted`
        let removed = store.sweep_expired_at(inserted + Duration::from_millis(elapsed_ms));

        if elapsed_ms <= ttl_ms {
            prop_assert_eq!(removed, 0);
            prop_assert!(store.get("key").is_some());
        } else if elapsed_ms > ttl_ms + 1_000 {
            prop_assert_eq!(removed, 1);
            prop_assert!(store.get("key").is_none());
        }
    }
}

// Concurrent access is exercised with real threads, so fewer cases
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // N threads doing put/get/delete on their own keys while another thread
    // keeps sweeping never lose or corrupt an entry that has not expired.
    #[test]
    fn prop_concurrent_operation_correctness(
        payloads in prop::collection::vec(payload_strategy(), 4..12),
        rounds in 1usize..20
    ) {
        let store = Arc::new(CacheStore::new(TEST_TTL));

        let sweeper = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut removed = 0;
                for _ in 0..rounds * 4 {
                    removed += store.sweep_expired();
                    thread::yield_now();
                }
                removed
            })
        };

        let workers: Vec<_> = payloads
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, payload)| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let key = format!("worker/{}", i);
                    let scratch = format!("scratch/{}", i);
                    for _ in 0..rounds {
                        store.put(key.clone(), payload.clone());
                        store.put(scratch.clone(), payload.clone());
                        if store.get(&key).as_ref() != Some(&payload) {
                            return Err(format!("Lost or corrupted entry {}", key));
                        }
                        store.delete(&scratch);
                    }
                    Ok(())
                })
            })
            .collect();

        for worker in workers {
            let result = worker.join().expect("Worker should not panic");
            prop_assert!(result.is_ok(), "Concurrent operation failed: {:?}", result);
        }
        let removed = sweeper.join().expect("Sweeper should not panic");
        prop_assert_eq!(removed, 0, "Nothing is old enough to be swept");

        // Only the surviving worker keys remain
        prop_assert_eq!(store.len(), payloads.len());
        let mut survivors = store.scan_prefix("worker/");
        survivors.sort();
        let mut expected: Vec<String> = (0..payloads.len()).map(|i| i.to_string()).collect();
        expected.sort();
        prop_assert_eq!(survivors, expected);
        prop_assert!(store.scan_prefix("scratch/").is_empty());
    }
}

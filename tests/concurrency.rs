//! # Concurrency Tests for SharedMap
//!
//! `OrderedMap` itself is single-threaded. These tests drive a `SharedMap`
//! from several threads to verify that the reader-writer discipline keeps
//! the tree consistent: writers are serialized, readers never observe a
//! half-finished rebalance.
//!
//! ## Test Categories
//!
//! - Basic concurrent tests: Lower contention, always run
//! - Stress tests: Higher contention, marked with `#[ignore]` - run with `cargo test -- --ignored`

#![cfg(not(loom))]

use rand::prelude::*;
use rbmap::{Error, SharedMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

// ===========================================================================
// Basic Concurrent Insert Tests
// ===========================================================================

#[test]
fn concurrent_insert_disjoint_ranges() {
	let map = Arc::new(SharedMap::<i32, i32>::new());
	let num_threads = 4;
	let entries_per_thread = 250;

	let handles: Vec<_> = (0..num_threads)
		.map(|t| {
			let map = Arc::clone(&map);
			thread::spawn(move || {
				for i in 0..entries_per_thread {
					let key = t * entries_per_thread + i;
					map.insert(key, key * 10);
				}
			})
		})
		.collect();

	for h in handles {
		h.join().unwrap();
	}

	assert_eq!(map.len(), (num_threads * entries_per_thread) as usize);
	map.read().assert_invariants();

	// Verify all entries
	for key in 0..num_threads * entries_per_thread {
		assert_eq!(map.get(&key), Some(key * 10), "Missing key {}", key);
	}
}

#[test]
fn concurrent_insert_same_keys() {
	let map = Arc::new(SharedMap::<i32, i32>::new());
	let num_threads = 4;
	let iterations = 200;

	// All threads repeatedly insert the same small set of keys
	let handles: Vec<_> = (0..num_threads)
		.map(|t| {
			let map = Arc::clone(&map);
			thread::spawn(move || {
				for i in 0..iterations {
					let key = i % 10; // Only 10 unique keys
					map.insert(key, t); // Value is thread ID
				}
			})
		})
		.collect();

	for h in handles {
		h.join().unwrap();
	}

	assert_eq!(map.len(), 10);
	map.read().assert_invariants();

	for key in 0..10 {
		let value = map.get(&key).expect("key should exist");
		assert!((0..num_threads).contains(&value), "Unexpected value {}", value);
	}
}

#[test]
fn concurrent_try_insert_exactly_one_winner() {
	let map = Arc::new(SharedMap::<i32, usize>::new());
	let wins = Arc::new(AtomicUsize::new(0));
	let num_threads = 8;

	let handles: Vec<_> = (0..num_threads)
		.map(|t| {
			let map = Arc::clone(&map);
			let wins = Arc::clone(&wins);
			thread::spawn(move || {
				for key in 0..100 {
					match map.try_insert(key, t) {
						Ok(()) => {
							wins.fetch_add(1, Ordering::Relaxed);
						}
						Err(Error::DuplicateKey) => {}
						Err(e) => panic!("unexpected error {}", e),
					}
				}
			})
		})
		.collect();

	for h in handles {
		h.join().unwrap();
	}

	// Each key is claimed by exactly one thread
	assert_eq!(wins.load(Ordering::Relaxed), 100);
	assert_eq!(map.len(), 100);
}

// ===========================================================================
// Readers During Writes
// ===========================================================================

#[test]
fn readers_see_consistent_trees() {
	let map = Arc::new(SharedMap::<u32, u32>::new());
	let done = Arc::new(AtomicBool::new(false));

	let writer = {
		let map = Arc::clone(&map);
		let done = Arc::clone(&done);
		thread::spawn(move || {
			let mut rng = StdRng::seed_from_u64(1);
			for _ in 0..2000 {
				let key = rng.random_range(0..5000);
				map.insert(key, key);
			}
			done.store(true, Ordering::Release);
		})
	};

	let readers: Vec<_> = (0..3)
		.map(|_| {
			let map = Arc::clone(&map);
			let done = Arc::clone(&done);
			thread::spawn(move || {
				let mut checks = 0;
				while !done.load(Ordering::Acquire) || checks == 0 {
					let guard = map.read();
					guard.assert_invariants();
					let keys: Vec<u32> = guard.keys().copied().collect();
					assert!(keys.windows(2).all(|w| w[0] < w[1]), "Keys not sorted");
					for k in &keys {
						assert_eq!(guard.get(k), Some(k));
					}
					checks += 1;
				}
				checks
			})
		})
		.collect();

	writer.join().unwrap();
	for r in readers {
		assert!(r.join().unwrap() > 0);
	}

	map.read().assert_invariants();
}

// ===========================================================================
// Stress Tests
// ===========================================================================

#[test]
#[ignore = "stress test, run with --ignored"]
fn stress_mixed_readers_and_writers() {
	let map = Arc::new(SharedMap::<u64, u64>::new());
	let num_threads = 8;

	let handles: Vec<_> = (0..num_threads)
		.map(|t| {
			let map = Arc::clone(&map);
			thread::spawn(move || {
				let mut rng = StdRng::seed_from_u64(t);
				for _ in 0..50_000 {
					let key = rng.random_range(0..100_000);
					if rng.random_bool(0.3) {
						map.insert(key, t);
					} else {
						let _ = map.lookup(&key, |v| *v);
					}
				}
			})
		})
		.collect();

	for h in handles {
		h.join().unwrap();
	}

	map.read().assert_invariants();
}

//! Loom-based concurrency tests for rbmap.
//!
//! These tests use loom to systematically explore all possible thread
//! interleavings of `SharedMap` operations, checking that the reader-writer
//! lock keeps every observed tree valid.
//!
//! # Running Loom Tests
//!
//! Loom tests must be run with the `loom` cfg flag:
//!
//! ```bash
//! RUSTFLAGS="--cfg loom" cargo test --test loom_tests --release -- --test-threads=1
//! ```
//!
//! # Test Design
//!
//! The number of interleavings grows exponentially, so each model uses two
//! or three threads and a handful of operations.

#![cfg(loom)]

use loom::sync::Arc;
use loom::thread;
use rbmap::{Error, SharedMap};

/// Two writers inserting disjoint keys both land.
#[test]
fn loom_concurrent_inserts() {
	loom::model(|| {
		let map = Arc::new(SharedMap::<i32, i32>::new());

		let t1 = {
			let map = Arc::clone(&map);
			thread::spawn(move || {
				map.insert(1, 10);
				map.insert(3, 30);
			})
		};

		let t2 = {
			let map = Arc::clone(&map);
			thread::spawn(move || {
				map.insert(2, 20);
			})
		};

		t1.join().unwrap();
		t2.join().unwrap();

		assert_eq!(map.len(), 3);
		assert_eq!(map.keys(), vec![1, 2, 3]);
		map.read().assert_invariants();
	});
}

/// A reader racing a writer sees either the old or the new entry, never a
/// broken tree.
#[test]
fn loom_reader_during_insert() {
	loom::model(|| {
		let map = Arc::new(SharedMap::<i32, i32>::new());
		map.insert(1, 10);
		map.insert(2, 20);

		let writer = {
			let map = Arc::clone(&map);
			thread::spawn(move || {
				map.insert(3, 30);
			})
		};

		let reader = {
			let map = Arc::clone(&map);
			thread::spawn(move || {
				let guard = map.read();
				guard.assert_invariants();
				guard.len()
			})
		};

		writer.join().unwrap();
		let seen = reader.join().unwrap();

		assert!(seen == 2 || seen == 3);
		assert_eq!(map.get(&3), Some(30));
	});
}

/// Competing `try_insert` calls on the same key: exactly one succeeds.
#[test]
fn loom_try_insert_single_winner() {
	loom::model(|| {
		let map = Arc::new(SharedMap::<i32, i32>::new());

		let handles: Vec<_> = (0..2)
			.map(|t| {
				let map = Arc::clone(&map);
				thread::spawn(move || map.try_insert(7, t))
			})
			.collect();

		let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

		assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
		assert!(results.iter().any(|r| *r == Err(Error::DuplicateKey)));
		assert_eq!(map.len(), 1);
	});
}

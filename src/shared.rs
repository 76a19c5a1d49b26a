//! # Shared Access to an OrderedMap
//!
//! [`OrderedMap`] mutates parent/child links and colors across several steps
//! during an insertion, so it must never be read while a write is in
//! progress. [`SharedMap`] enforces the single-writer/multiple-reader
//! discipline with a reader-writer lock:
//!
//! - `insert`, `try_insert` and `clear` take the write lock
//! - every query takes the read lock, so readers proceed in parallel
//!
//! Each method holds the lock for exactly one operation. For compound
//! operations that must be atomic, hold a guard from [`read`](SharedMap::read)
//! or [`write`](SharedMap::write) instead.
//!
//! ```
//! use rbmap::SharedMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let map = Arc::new(SharedMap::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let map = Arc::clone(&map);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 map.insert(t * 100 + i, i);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert_eq!(map.len(), 400);
//! ```

use crate::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::{OrderedMap, Result};
use std::borrow::Borrow;
use std::fmt;

/// An [`OrderedMap`] behind a reader-writer lock.
pub struct SharedMap<K, V> {
	inner: RwLock<OrderedMap<K, V>>,
}

impl<K, V> Default for SharedMap<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K, V> From<OrderedMap<K, V>> for SharedMap<K, V> {
	fn from(map: OrderedMap<K, V>) -> Self {
		SharedMap {
			inner: RwLock::new(map),
		}
	}
}

impl<K, V> SharedMap<K, V> {
	/// Creates a new, empty shared map.
	pub fn new() -> Self {
		SharedMap::from(OrderedMap::new())
	}

	/// Acquires the read lock for a sequence of queries.
	pub fn read(&self) -> RwLockReadGuard<'_, OrderedMap<K, V>> {
		self.inner.read()
	}

	/// Acquires the write lock for a sequence of mutations.
	pub fn write(&self) -> RwLockWriteGuard<'_, OrderedMap<K, V>> {
		self.inner.write()
	}

	/// Consumes the lock and returns the map.
	pub fn into_inner(self) -> OrderedMap<K, V> {
		self.inner.into_inner()
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.read().len()
	}

	/// Returns `true` if the map contains no entries.
	pub fn is_empty(&self) -> bool {
		self.read().is_empty()
	}

	/// Returns the height of the tree. See [`OrderedMap::height`].
	pub fn height(&self) -> usize {
		self.read().height()
	}

	/// Removes every entry.
	pub fn clear(&self) {
		self.write().clear()
	}
}

impl<K: Ord, V> SharedMap<K, V> {
	/// Inserts a key-value pair, returning the value it replaced.
	pub fn insert(&self, key: K, value: V) -> Option<V> {
		self.write().insert(key, value)
	}

	/// Inserts a key-value pair only if the key is absent.
	///
	/// # Errors
	///
	/// Returns [`Error::DuplicateKey`](crate::Error::DuplicateKey) if the key exists.
	pub fn try_insert(&self, key: K, value: V) -> Result<()> {
		self.write().try_insert(key, value)
	}

	/// Applies `f` to the value for `key` while holding the read lock.
	///
	/// The closure runs under the lock, so keep it short and do not call back
	/// into the same map from inside it.
	pub fn lookup<Q, R, F>(&self, key: &Q, f: F) -> Option<R>
	where
		K: Borrow<Q>,
		Q: ?Sized + Ord,
		F: FnOnce(&V) -> R,
	{
		self.read().lookup(key, f)
	}

	/// Returns a clone of the value for `key`.
	pub fn get<Q>(&self, key: &Q) -> Option<V>
	where
		K: Borrow<Q>,
		Q: ?Sized + Ord,
		V: Clone,
	{
		self.lookup(key, V::clone)
	}

	/// Returns `true` if the map contains `key`.
	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: ?Sized + Ord,
	{
		self.read().contains_key(key)
	}

	/// Returns a snapshot of the keys in ascending order.
	pub fn keys(&self) -> Vec<K>
	where
		K: Clone,
	{
		self.read().keys().cloned().collect()
	}
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SharedMap<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("SharedMap").field(&*self.read()).finish()
	}
}

//! Reader-writer lock with loom support.
//!
//! Under normal compilation this re-exports `parking_lot`'s lock. Under
//! `cfg(loom)` it provides a wrapper around loom's lock with the same
//! guard-returning API, so [`SharedMap`](crate::SharedMap) can be
//! model-checked without changes.

#[cfg(not(loom))]
pub(crate) use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(loom)]
mod loom_rwlock {
	//! parking_lot-shaped wrapper over loom's RwLock.
	//!
	//! loom's lock returns `LockResult`s. The map is never left half-updated
	//! by a panicking writer in these models, so poisoning is treated as a bug.

	use loom::sync::{
		RwLock as LoomRwLock, RwLockReadGuard as LoomReadGuard, RwLockWriteGuard as LoomWriteGuard,
	};
	use std::ops::{Deref, DerefMut};

	pub(crate) struct RwLock<T>(LoomRwLock<T>);

	impl<T> RwLock<T> {
		pub(crate) fn new(value: T) -> Self {
			RwLock(LoomRwLock::new(value))
		}

		pub(crate) fn read(&self) -> RwLockReadGuard<'_, T> {
			RwLockReadGuard(self.0.read().expect("loom rwlock poisoned"))
		}

		pub(crate) fn write(&self) -> RwLockWriteGuard<'_, T> {
			RwLockWriteGuard(self.0.write().expect("loom rwlock poisoned"))
		}

		pub(crate) fn into_inner(self) -> T {
			self.0.into_inner().expect("loom rwlock poisoned")
		}
	}

	pub struct RwLockReadGuard<'a, T>(LoomReadGuard<'a, T>);

	impl<T> Deref for RwLockReadGuard<'_, T> {
		type Target = T;

		fn deref(&self) -> &T {
			&self.0
		}
	}

	pub struct RwLockWriteGuard<'a, T>(LoomWriteGuard<'a, T>);

	impl<T> Deref for RwLockWriteGuard<'_, T> {
		type Target = T;

		fn deref(&self) -> &T {
			&self.0
		}
	}

	impl<T> DerefMut for RwLockWriteGuard<'_, T> {
		fn deref_mut(&mut self) -> &mut T {
			&mut self.0
		}
	}
}

#[cfg(loom)]
pub(crate) use loom_rwlock::{RwLock, RwLockReadGuard, RwLockWriteGuard};

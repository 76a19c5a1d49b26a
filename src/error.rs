//! # Error Types for the Red-Black Map
//!
//! Lookups never fail: a missing key is reported as `None`. Errors only
//! appear in two places:
//!
//! - [`OrderedMap::try_insert`](crate::OrderedMap::try_insert), which rejects
//!   keys that are already present.
//! - [`OrderedMap::validate`](crate::OrderedMap::validate), which walks the
//!   whole tree and reports the first broken invariant it finds.
//!
//! A validation error on a map built only through the public API means the
//! map itself is defective. The variants carry the depth at which the
//! problem was detected (0 = root) so the dump can be used to locate it.

use thiserror::Error;

/// Errors reported by the map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// `try_insert` was called with a key that is already stored.
	///
	/// The existing entry is left untouched.
	#[error("key is already present")]
	DuplicateKey,

	/// The root node is colored red.
	#[error("root node is red")]
	RedRoot,

	/// A red node has a red child.
	#[error("red node at depth {depth} has a red parent")]
	RedViolation {
		/// Depth of the child half of the red-red pair.
		depth: usize,
	},

	/// The two subtrees of a node have different black heights.
	#[error("black height mismatch below depth {depth}: left {left}, right {right}")]
	BlackHeightMismatch {
		/// Depth of the node whose subtrees disagree.
		depth: usize,
		/// Black height of the left subtree.
		left: usize,
		/// Black height of the right subtree.
		right: usize,
	},

	/// A key is out of order with respect to one of its ancestors.
	#[error("key at depth {depth} violates the search order")]
	OrderViolation {
		/// Depth of the misplaced key.
		depth: usize,
	},

	/// A child's parent link does not point back at the node holding it.
	#[error("node at depth {depth} has a broken parent link")]
	BrokenParentLink {
		/// Depth of the child.
		depth: usize,
	},

	/// A child's orientation flag disagrees with the slot it occupies.
	#[error("node at depth {depth} has a stale orientation flag")]
	OrientationMismatch {
		/// Depth of the child.
		depth: usize,
	},

	/// The number of reachable nodes differs from the stored entry count.
	#[error("map reports {len} entries but {reachable} are reachable from the root")]
	LenMismatch {
		/// Entry count reported by `len()`.
		len: usize,
		/// Nodes actually reachable from the root.
		reachable: usize,
	},
}

/// A Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

//! # rbmap: An Arena-Backed Red-Black Tree Map
//!
//! This crate provides [`OrderedMap`], an ordered key/value map implemented as a
//! red-black tree. Insertion rebalances automatically, so lookups, insertions
//! and the height of the tree all stay logarithmic in the number of entries.
//!
//! ## Design Overview
//!
//! **Arena Storage**: Every node lives in a single `Vec` owned by the map and is
//! addressed by a `NodeId` index. Parent and child links are
//! optional indices, so the parent/child cycle of a classic red-black tree
//! needs no reference counting and no raw pointers. A rotation is a handful of
//! index reassignments.
//!
//! **Orientation Flags**: Each node records whether it is the left or the right
//! child of its parent. Rotation cases are selected from these flags rather
//! than by re-comparing keys.
//!
//! **Iterative Fixup**: The recolor step that pushes a red-red violation up to
//! the grandparent is a loop walking parent links, so stack usage does not
//! depend on the size of the tree.
//!
//! ### Invariants
//!
//! 1. The root is black.
//! 2. No red node has a red parent.
//! 3. Every path from a node to an absent child crosses the same number of
//!    black nodes (its black height).
//! 4. Keys strictly increase from left to right.
//!
//! Together (2) and (3) bound the height by `2 * log2(n + 1)`.
//!
//! ### Insertion Cases
//!
//! ```text
//!   aunt red: recolor, continue at G       aunt black, same side: rotate at G
//!
//!        G(b)            G(r)                   G(b)             P(b)
//!       /    \          /    \                 /                /    \
//!     P(r)  A(r)  =>  P(b)  A(b)             P(r)       =>   N(r)    G(r)
//!     /               /                      /
//!   N(r)            N(r)                   N(r)
//!
//!   aunt black, opposite sides: rotate at P, then at G
//!
//!        G(b)            G(b)            N(b)
//!       /               /               /    \
//!     P(r)      =>    N(r)      =>    P(r)    G(r)
//!        \            /
//!        N(r)       P(r)
//! ```
//!
//! ## Basic Usage
//!
//! ```
//! use rbmap::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//!
//! map.insert(3, "three");
//! map.insert(1, "one");
//! map.insert(2, "two");
//!
//! assert_eq!(map.get(&2), Some(&"two"));
//! assert!(!map.contains_key(&4));
//!
//! // Keys come back in ascending order
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, vec![1, 2, 3]);
//! ```
//!
//! ## Thread Safety
//!
//! `OrderedMap` takes `&mut self` for every mutation and performs no internal
//! synchronization. Use [`SharedMap`] to share a map between threads under a
//! single-writer/multiple-reader lock.

use tracing::{debug, trace};

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

pub mod dump;
pub mod error;
pub mod iter;
mod node;
pub mod shared;
pub(crate) mod sync;

#[cfg(test)]
mod util;

pub use error::{Error, Result};
pub use node::Color;
pub use shared::SharedMap;

use node::{Node, NodeId, Side};

// ---------------------------------------------------------------------------
// Configuration Constants
// ---------------------------------------------------------------------------

/// Number of node handles an iterator or dump keeps inline before spilling
/// its traversal stack to the heap.
///
/// A red-black tree of `n` entries is at most `2 * log2(n + 1)` levels deep,
/// so 48 inline slots cover every tree of up to 16 million entries.
pub(crate) const INLINE_DEPTH: usize = 48;

// ---------------------------------------------------------------------------
// Core Map Structure
// ---------------------------------------------------------------------------

/// An ordered map backed by a red-black tree.
///
/// # Type Parameters
///
/// - `K`: The key type. Must implement `Ord` for every operation that looks
///   keys up or places them.
/// - `V`: The value type. No bounds are required.
///
/// # Internal Structure
///
/// - `nodes`: The arena. A node's `NodeId` is its index in this vector.
///   Nodes are only appended, so the arena length is the entry count.
/// - `root`: Handle of the root node, `None` while the map is empty.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
	pub(crate) nodes: Vec<Node<K, V>>,
	pub(crate) root: Option<NodeId>,
}

impl<K, V> Default for OrderedMap<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

// ---------------------------------------------------------------------------
// Internal Helper Types
// ---------------------------------------------------------------------------

/// Outcome of searching for the place a key belongs.
enum Slot {
	/// The key is already stored in this node.
	Occupied(NodeId),
	/// The key is absent. `None` means the map is empty and the key becomes
	/// the root; otherwise it is attached below the given parent on the given side.
	Vacant(Option<(NodeId, Side)>),
}

// ---------------------------------------------------------------------------
// Construction and Size
// ---------------------------------------------------------------------------

impl<K, V> OrderedMap<K, V> {
	/// Creates a new, empty map. Does not allocate.
	///
	/// # Example
	///
	/// ```
	/// use rbmap::OrderedMap;
	///
	/// let map: OrderedMap<String, i32> = OrderedMap::new();
	/// assert!(map.is_empty());
	/// assert_eq!(map.height(), 0);
	/// ```
	pub const fn new() -> Self {
		OrderedMap {
			nodes: Vec::new(),
			root: None,
		}
	}

	/// Creates an empty map whose arena can hold `capacity` entries before
	/// reallocating.
	pub fn with_capacity(capacity: usize) -> Self {
		OrderedMap {
			nodes: Vec::with_capacity(capacity),
			root: None,
		}
	}

	/// Returns the number of entries in the map. O(1).
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns `true` if the map contains no entries.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Removes every entry, keeping the arena's allocation.
	pub fn clear(&mut self) {
		debug!(len = self.nodes.len(), "clearing map");
		self.nodes.clear();
		self.root = None;
	}

	// -----------------------------------------------------------------------
	// Structural Queries
	// -----------------------------------------------------------------------

	/// Returns the number of edges on the longest root-to-leaf path.
	///
	/// An empty map and a map with a single entry both have height 0.
	///
	/// # Example
	///
	/// ```
	/// use rbmap::OrderedMap;
	///
	/// let mut map = OrderedMap::new();
	/// assert_eq!(map.height(), 0);
	///
	/// map.insert(1, ());
	/// assert_eq!(map.height(), 0);
	///
	/// map.insert(2, ());
	/// assert_eq!(map.height(), 1);
	/// ```
	pub fn height(&self) -> usize {
		match self.root {
			// Levels counts nodes, height counts edges
			Some(root) => self.levels(Some(root)) - 1,
			None => 0,
		}
	}

	/// Number of nodes on the longest downward path starting at `id`.
	fn levels(&self, id: Option<NodeId>) -> usize {
		match id {
			Some(id) => {
				let node = self.node(id);
				1 + self.levels(node[Side::Left]).max(self.levels(node[Side::Right]))
			}
			None => 0,
		}
	}

	/// Returns the number of black nodes on any path from the root to an
	/// absent child. Absent children are not counted; an empty map returns 0.
	pub fn black_height(&self) -> usize {
		let mut count = 0;
		let mut current = self.root;
		while let Some(id) = current {
			let node = self.node(id);
			if !node.is_red() {
				count += 1;
			}
			current = node[Side::Left];
		}
		count
	}

	/// Returns the color of the root node, or `None` if the map is empty.
	pub fn root_color(&self) -> Option<Color> {
		self.root.map(|id| self.node(id).color)
	}

	/// Returns the entry with the smallest key.
	pub fn first_key_value(&self) -> Option<(&K, &V)> {
		self.extreme(Side::Left)
	}

	/// Returns the entry with the largest key.
	pub fn last_key_value(&self) -> Option<(&K, &V)> {
		self.extreme(Side::Right)
	}

	fn extreme(&self, side: Side) -> Option<(&K, &V)> {
		let mut id = self.root?;
		while let Some(child) = self.node(id)[side] {
			id = child;
		}
		let node = self.node(id);
		Some((&node.key, &node.value))
	}

	// -----------------------------------------------------------------------
	// Iteration and Diagnostics
	// -----------------------------------------------------------------------

	/// Returns an iterator over the entries, sorted by key.
	///
	/// Every call starts a fresh traversal.
	pub fn iter(&self) -> iter::Iter<'_, K, V> {
		iter::Iter::new(self)
	}

	/// Returns an iterator over the keys in ascending order.
	///
	/// # Example
	///
	/// ```
	/// use rbmap::OrderedMap;
	///
	/// let mut map = OrderedMap::new();
	/// for i in (1..=10).rev() {
	///     map.insert(i, "value");
	/// }
	///
	/// let keys: Vec<i32> = map.keys().copied().collect();
	/// assert_eq!(keys, (1..=10).collect::<Vec<_>>());
	/// ```
	pub fn keys(&self) -> iter::Keys<'_, K, V> {
		iter::Keys::new(self.iter())
	}

	/// Returns an iterator over the values, in the order of their keys.
	pub fn values(&self) -> iter::Values<'_, K, V> {
		iter::Values::new(self.iter())
	}

	/// Returns a printable in-order dump of the tree.
	///
	/// Each key is written on its own line, prefixed with one `.` per level of
	/// depth and followed by its color:
	///
	/// ```
	/// use rbmap::OrderedMap;
	///
	/// let mut map = OrderedMap::new();
	/// map.insert(2, ());
	/// map.insert(1, ());
	/// map.insert(3, ());
	///
	/// assert_eq!(map.dump().to_string(), ".1 : Red\n2 : Black\n.3 : Red\n");
	/// ```
	#[doc(alias = "print")]
	pub fn dump(&self) -> dump::Dump<'_, K, V> {
		dump::Dump::new(self)
	}

	/// Writes [`dump`](Self::dump) to standard output.
	///
	/// Use `dump()` directly to capture the same text.
	pub fn print(&self)
	where
		K: fmt::Display,
	{
		print!("{}", self.dump());
	}

	// -----------------------------------------------------------------------
	// Arena Access
	// -----------------------------------------------------------------------

	#[inline]
	pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
		&self.nodes[id.index()]
	}

	#[inline]
	fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
		&mut self.nodes[id.index()]
	}

	#[inline]
	fn set_color(&mut self, id: NodeId, color: Color) {
		self.node_mut(id).color = color;
	}

	/// Places `child` in the `side` slot of `parent`, updating the child's
	/// parent link and orientation flag.
	fn link(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
		self.node_mut(parent)[side] = child;
		if let Some(child) = child {
			let node = self.node_mut(child);
			node.parent = Some(parent);
			node.side = side;
		}
	}

	// -----------------------------------------------------------------------
	// Rotations
	// -----------------------------------------------------------------------

	/// Moves `pivot` down towards `down`, promoting its child on the opposite
	/// side into its place.
	///
	/// The promoted child's inner subtree (the one on the `down` side) is handed
	/// over to `pivot`, and the promoted child inherits `pivot`'s parent slot,
	/// or the root reference if `pivot` was the root. In-order key sequence is
	/// preserved.
	///
	/// ```text
	///   rotate(P, Right)
	///
	///         P               L
	///        / \             / \
	///       L   c    =>     a   P
	///      / \                 / \
	///     a   b               b   c
	/// ```
	fn rotate(&mut self, pivot: NodeId, down: Side) {
		let up = down.opposite();
		let promoted = self.node(pivot)[up].expect("rotation requires a child to promote");

		// Hand the promoted node's inner subtree to the pivot
		let inner = self.node(promoted)[down];
		self.link(pivot, up, inner);

		// The promoted node takes the pivot's place
		let parent = self.node(pivot).parent;
		let side = self.node(pivot).side;
		match parent {
			Some(parent) => self.link(parent, side, Some(promoted)),
			None => {
				self.root = Some(promoted);
				self.node_mut(promoted).parent = None;
			}
		}

		self.link(promoted, down, Some(pivot));
	}

	/// Promotes the right child of `pivot`.
	fn rotate_left(&mut self, pivot: NodeId) {
		trace!(pivot = pivot.index(), "rotate left");
		self.rotate(pivot, Side::Left);
	}

	/// Promotes the left child of `pivot`.
	fn rotate_right(&mut self, pivot: NodeId) {
		trace!(pivot = pivot.index(), "rotate right");
		self.rotate(pivot, Side::Right);
	}

	// -----------------------------------------------------------------------
	// Rebalancing
	// -----------------------------------------------------------------------

	/// Restores the red-black invariants after `node` was attached as a red leaf.
	///
	/// # Algorithm
	///
	/// 1. If `node` is the root, color it black and stop.
	/// 2. If `node` or its parent is black, nothing is violated: stop.
	/// 3. Look at the aunt (the grandparent's other child):
	///    - Red aunt: recolor parent and aunt black and the grandparent red,
	///      then repeat from the grandparent, which may now be red under a
	///      red parent.
	///    - Black or absent aunt: rotate (see [`restructure`](Self::restructure)).
	///      The rotated subtree gets a black root, so the loop ends.
	fn rebalance(&mut self, mut node: NodeId) {
		loop {
			let Some(parent) = self.node(node).parent else {
				self.set_color(node, Color::Black);
				return;
			};

			if !self.node(node).is_red() || !self.node(parent).is_red() {
				return;
			}

			// The root is always black, so a red parent has a parent of its own
			let Some(grandparent) = self.node(parent).parent else {
				self.set_color(parent, Color::Black);
				return;
			};

			let aunt = self.node(grandparent)[self.node(parent).side.opposite()];
			match aunt {
				Some(aunt) if self.node(aunt).is_red() => {
					trace!(grandparent = grandparent.index(), "recolor");
					self.set_color(parent, Color::Black);
					self.set_color(aunt, Color::Black);
					self.set_color(grandparent, Color::Red);
					node = grandparent;
				}
				_ => {
					self.restructure(node, parent, grandparent);
					return;
				}
			}
		}
	}

	/// Resolves a red-red pair whose aunt is black by rotation.
	///
	/// The four cases are selected by the orientation of the parent and the
	/// node. Afterwards the subtree root is black and both its children are red.
	fn restructure(&mut self, node: NodeId, parent: NodeId, grandparent: NodeId) {
		let top = match (self.node(parent).side, self.node(node).side) {
			(Side::Left, Side::Left) => {
				self.rotate_right(grandparent);
				parent
			}
			(Side::Right, Side::Right) => {
				self.rotate_left(grandparent);
				parent
			}
			(Side::Left, Side::Right) => {
				self.rotate_left(parent);
				self.rotate_right(grandparent);
				node
			}
			(Side::Right, Side::Left) => {
				self.rotate_right(parent);
				self.rotate_left(grandparent);
				node
			}
		};

		self.set_color(top, Color::Black);
		for side in [Side::Left, Side::Right] {
			if let Some(child) = self.node(top)[side] {
				self.set_color(child, Color::Red);
			}
		}
	}
}

// ---------------------------------------------------------------------------
// Ordered Operations
// ---------------------------------------------------------------------------

impl<K: Ord, V> OrderedMap<K, V> {
	// -----------------------------------------------------------------------
	// Public API: Read Operations
	// -----------------------------------------------------------------------

	/// Returns a reference to the value stored for `key`.
	///
	/// # Example
	///
	/// ```
	/// use rbmap::OrderedMap;
	///
	/// let mut map = OrderedMap::new();
	/// map.insert("one".to_string(), 1);
	///
	/// assert_eq!(map.get("one"), Some(&1));
	/// assert_eq!(map.get("two"), None);
	/// ```
	pub fn get<Q>(&self, key: &Q) -> Option<&V>
	where
		K: Borrow<Q>,
		Q: ?Sized + Ord,
	{
		self.find(key).map(|id| &self.node(id).value)
	}

	/// Returns a mutable reference to the value stored for `key`.
	pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
	where
		K: Borrow<Q>,
		Q: ?Sized + Ord,
	{
		let id = self.find(key)?;
		Some(&mut self.node_mut(id).value)
	}

	/// Returns the stored key and value for `key`.
	pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
	where
		K: Borrow<Q>,
		Q: ?Sized + Ord,
	{
		self.find(key).map(|id| {
			let node = self.node(id);
			(&node.key, &node.value)
		})
	}

	/// Applies `f` to the value stored for `key` and returns its result.
	///
	/// ```
	/// use rbmap::OrderedMap;
	///
	/// let mut map = OrderedMap::new();
	/// map.insert(1, vec![1, 2, 3]);
	///
	/// assert_eq!(map.lookup(&1, |v| v.len()), Some(3));
	/// assert_eq!(map.lookup(&2, |v| v.len()), None);
	/// ```
	pub fn lookup<Q, R, F>(&self, key: &Q, f: F) -> Option<R>
	where
		K: Borrow<Q>,
		Q: ?Sized + Ord,
		F: FnOnce(&V) -> R,
	{
		self.get(key).map(f)
	}

	/// Returns `true` if the map contains `key`.
	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: ?Sized + Ord,
	{
		self.find(key).is_some()
	}

	/// Descends from the root until `key` matches or a child is missing.
	fn find<Q>(&self, key: &Q) -> Option<NodeId>
	where
		K: Borrow<Q>,
		Q: ?Sized + Ord,
	{
		let mut current = self.root;
		while let Some(id) = current {
			let node = self.node(id);
			current = match key.cmp(node.key.borrow()) {
				Ordering::Less => node[Side::Left],
				Ordering::Greater => node[Side::Right],
				Ordering::Equal => return Some(id),
			};
		}
		None
	}

	// -----------------------------------------------------------------------
	// Public API: Write Operations
	// -----------------------------------------------------------------------

	/// Inserts a key-value pair into the map.
	///
	/// If the key already exists, the value is replaced and the old value is
	/// returned; the tree shape does not change. If the key is new, `None` is
	/// returned and the tree is rebalanced.
	///
	/// # Example
	///
	/// ```
	/// use rbmap::OrderedMap;
	///
	/// let mut map = OrderedMap::new();
	///
	/// assert_eq!(map.insert(1, "one"), None);       // New key
	/// assert_eq!(map.insert(1, "uno"), Some("one")); // Update existing
	/// assert_eq!(map.len(), 1);
	/// ```
	pub fn insert(&mut self, key: K, value: V) -> Option<V> {
		match self.search(&key) {
			Slot::Occupied(id) => Some(std::mem::replace(&mut self.node_mut(id).value, value)),
			Slot::Vacant(at) => {
				self.attach(at, key, value);
				None
			}
		}
	}

	/// Inserts a key-value pair only if the key is not already present.
	///
	/// # Errors
	///
	/// Returns [`Error::DuplicateKey`] if the key exists. The stored value is
	/// left unchanged and the rejected pair is dropped.
	///
	/// # Example
	///
	/// ```
	/// use rbmap::{Error, OrderedMap};
	///
	/// let mut map = OrderedMap::new();
	///
	/// assert_eq!(map.try_insert(1, "one"), Ok(()));
	/// assert_eq!(map.try_insert(1, "uno"), Err(Error::DuplicateKey));
	/// assert_eq!(map.get(&1), Some(&"one"));
	/// ```
	pub fn try_insert(&mut self, key: K, value: V) -> Result<()> {
		match self.search(&key) {
			Slot::Occupied(_) => Err(Error::DuplicateKey),
			Slot::Vacant(at) => {
				self.attach(at, key, value);
				Ok(())
			}
		}
	}

	/// Finds the node holding `key`, or the empty slot where it belongs.
	fn search(&self, key: &K) -> Slot {
		let Some(mut current) = self.root else {
			return Slot::Vacant(None);
		};

		loop {
			let node = self.node(current);
			let side = match key.cmp(&node.key) {
				Ordering::Less => Side::Left,
				Ordering::Greater => Side::Right,
				Ordering::Equal => return Slot::Occupied(current),
			};
			match node[side] {
				Some(child) => current = child,
				None => return Slot::Vacant(Some((current, side))),
			}
		}
	}

	/// Appends a new node to the arena, links it at `at` and rebalances.
	fn attach(&mut self, at: Option<(NodeId, Side)>, key: K, value: V) {
		let id = NodeId::new(self.nodes.len());
		self.nodes.push(Node::new(key, value));

		match at {
			Some((parent, side)) => {
				self.link(parent, side, Some(id));
				self.rebalance(id);
			}
			None => {
				self.root = Some(id);
				self.set_color(id, Color::Black);
			}
		}
	}

	// -----------------------------------------------------------------------
	// Validation
	// -----------------------------------------------------------------------

	/// Walks the whole tree and checks every structural invariant.
	///
	/// # Invariants Checked
	///
	/// 1. The root is black and has no parent
	/// 2. Every child links back to its parent and its orientation flag
	///    names the slot it occupies
	/// 3. No red node has a red child
	/// 4. Both subtrees of every node have the same black height
	/// 5. Keys strictly increase in order
	/// 6. Every arena node is reachable from the root
	///
	/// # Errors
	///
	/// Returns the first violation found, in depth-first order.
	pub fn validate(&self) -> Result<()> {
		let Some(root) = self.root else {
			return match self.nodes.len() {
				0 => Ok(()),
				len => Err(Error::LenMismatch {
					len,
					reachable: 0,
				}),
			};
		};

		let node = self.node(root);
		if node.is_red() {
			return Err(Error::RedRoot);
		}
		if node.parent.is_some() {
			return Err(Error::BrokenParentLink {
				depth: 0,
			});
		}

		let mut reachable = 0;
		self.validate_subtree(root, 0, None, None, &mut reachable)?;

		if reachable != self.nodes.len() {
			return Err(Error::LenMismatch {
				len: self.nodes.len(),
				reachable,
			});
		}
		Ok(())
	}

	/// Validates the subtree rooted at `id` and returns its black height.
	///
	/// `lower` and `upper` are the exclusive key bounds inherited from the
	/// ancestors.
	fn validate_subtree(
		&self,
		id: NodeId,
		depth: usize,
		lower: Option<&K>,
		upper: Option<&K>,
		reachable: &mut usize,
	) -> Result<usize> {
		*reachable += 1;
		// More visits than nodes means the links form a cycle
		if *reachable > self.nodes.len() {
			return Err(Error::LenMismatch {
				len: self.nodes.len(),
				reachable: *reachable,
			});
		}

		let node = self.node(id);
		let below_lower = lower.is_some_and(|lower| node.key <= *lower);
		let above_upper = upper.is_some_and(|upper| node.key >= *upper);
		if below_lower || above_upper {
			return Err(Error::OrderViolation {
				depth,
			});
		}

		let mut heights = [0usize; 2];
		for (slot, side) in [Side::Left, Side::Right].into_iter().enumerate() {
			let Some(child_id) = node[side] else {
				continue;
			};
			let child = self.node(child_id);

			if child.parent != Some(id) {
				return Err(Error::BrokenParentLink {
					depth: depth + 1,
				});
			}
			if child.side != side {
				return Err(Error::OrientationMismatch {
					depth: depth + 1,
				});
			}
			if node.is_red() && child.is_red() {
				return Err(Error::RedViolation {
					depth: depth + 1,
				});
			}

			let (lo, hi) = match side {
				Side::Left => (lower, Some(&node.key)),
				Side::Right => (Some(&node.key), upper),
			};
			heights[slot] = self.validate_subtree(child_id, depth + 1, lo, hi, reachable)?;
		}

		let [left, right] = heights;
		if left != right {
			return Err(Error::BlackHeightMismatch {
				depth,
				left,
				right,
			});
		}
		Ok(left + usize::from(!node.is_red()))
	}

	/// Validates all invariants and panics with the violation if any fails.
	///
	/// Intended for tests: call it after a sequence of operations to check
	/// that the map kept its structural integrity.
	pub fn assert_invariants(&self) {
		if let Err(e) = self.validate() {
			panic!("red-black invariant violated: {e}");
		}
	}
}

// ---------------------------------------------------------------------------
// Trait Implementations
// ---------------------------------------------------------------------------

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().eq(other.iter())
	}
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = OrderedMap::new();
		map.extend(iter);
		map
	}
}

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		let iter = iter.into_iter();
		self.nodes.reserve(iter.size_hint().0);
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
	type Item = (&'a K, &'a V);
	type IntoIter = iter::Iter<'a, K, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
	type Item = (K, V);
	type IntoIter = iter::IntoIter<K, V>;

	fn into_iter(self) -> Self::IntoIter {
		iter::IntoIter::new(self)
	}
}

/// Handles collected along a path; used by tests to inspect shapes.
#[cfg(test)]
type Path = smallvec::SmallVec<[NodeId; INLINE_DEPTH]>;

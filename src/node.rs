//! Arena nodes and the small enums that describe them.
use std::fmt;
use std::ops::{Index, IndexMut};

/// Handle to a node stored in the map's arena.
///
/// Handles are plain indices. They stay valid for the lifetime of the node
/// because nodes are only ever appended to the arena; `clear` drops the
/// whole arena at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
	#[inline]
	pub(crate) fn new(index: usize) -> Self {
		NodeId(index)
	}

	#[inline]
	pub(crate) fn index(self) -> usize {
		self.0
	}
}

/// Color tag of a red-black tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
	/// Red node. A red node never has a red parent.
	Red,
	/// Black node. Every root-to-leaf path crosses the same number of them.
	Black,
}

impl Color {
	#[inline]
	pub(crate) fn is_red(self) -> bool {
		self == Color::Red
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Color::Red => f.write_str("Red"),
			Color::Black => f.write_str("Black"),
		}
	}
}

/// Which child slot of its parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
	Left,
	Right,
}

impl Side {
	#[inline]
	pub(crate) fn opposite(self) -> Side {
		match self {
			Side::Left => Side::Right,
			Side::Right => Side::Left,
		}
	}
}

/// A single entry of the tree.
///
/// `side` mirrors the parent's child slot so rotations can pick a direction
/// without comparing keys. It is meaningless for the root.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
	pub(crate) key: K,
	pub(crate) value: V,
	pub(crate) color: Color,
	pub(crate) parent: Option<NodeId>,
	pub(crate) children: [Option<NodeId>; 2],
	pub(crate) side: Side,
}

impl<K, V> Node<K, V> {
	/// Creates a detached red node.
	pub(crate) fn new(key: K, value: V) -> Self {
		Node {
			key,
			value,
			color: Color::Red,
			parent: None,
			children: [None, None],
			side: Side::Left,
		}
	}

	#[inline]
	pub(crate) fn is_red(&self) -> bool {
		self.color.is_red()
	}
}

impl<K, V> Index<Side> for Node<K, V> {
	type Output = Option<NodeId>;

	#[inline]
	fn index(&self, side: Side) -> &Option<NodeId> {
		match side {
			Side::Left => &self.children[0],
			Side::Right => &self.children[1],
		}
	}
}

impl<K, V> IndexMut<Side> for Node<K, V> {
	#[inline]
	fn index_mut(&mut self, side: Side) -> &mut Option<NodeId> {
		match side {
			Side::Left => &mut self.children[0],
			Side::Right => &mut self.children[1],
		}
	}
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Node<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Node")
			.field("key", &self.key)
			.field("value", &self.value)
			.field("color", &self.color)
			.field("parent", &self.parent)
			.field("left", &self[Side::Left])
			.field("right", &self[Side::Right])
			.finish()
	}
}

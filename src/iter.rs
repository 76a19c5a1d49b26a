//! Iterators for the `OrderedMap` data structure
//!
//! All borrowing iterators share one in-order traversal, [`Iter`], which keeps
//! two explicit stacks of node handles: one walking up from the smallest key,
//! one walking down from the largest. A shared `remaining` counter stops both
//! ends once every entry has been yielded, so the two walks never cross.
use crate::node::{Node, NodeId, Side};
use crate::{OrderedMap, INLINE_DEPTH};
use smallvec::SmallVec;
use std::iter::FusedIterator;

type Stack = SmallVec<[NodeId; INLINE_DEPTH]>;

/// Iterator over the entries of an [`OrderedMap`], sorted by key.
pub struct Iter<'a, K, V> {
	nodes: &'a [Node<K, V>],
	front: Stack,
	back: Stack,
	remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
	pub(crate) fn new(map: &'a OrderedMap<K, V>) -> Iter<'a, K, V> {
		let mut iter = Iter {
			nodes: &map.nodes,
			front: Stack::new(),
			back: Stack::new(),
			remaining: map.len(),
		};
		iter.descend(map.root, Side::Left);
		iter.descend(map.root, Side::Right);
		iter
	}

	/// Pushes `start` and every node on its `toward` spine onto the stack for
	/// that end.
	fn descend(&mut self, start: Option<NodeId>, toward: Side) {
		let stack = match toward {
			Side::Left => &mut self.front,
			Side::Right => &mut self.back,
		};
		let mut current = start;
		while let Some(id) = current {
			stack.push(id);
			current = self.nodes[id.index()][toward];
		}
	}

	/// Pops the next handle from the front, in ascending key order.
	pub(crate) fn next_id(&mut self) -> Option<NodeId> {
		if self.remaining == 0 {
			return None;
		}
		let id = self.front.pop()?;
		self.descend(self.nodes[id.index()][Side::Right], Side::Left);
		self.remaining -= 1;
		Some(id)
	}

	/// Pops the next handle from the back, in descending key order.
	pub(crate) fn next_back_id(&mut self) -> Option<NodeId> {
		if self.remaining == 0 {
			return None;
		}
		let id = self.back.pop()?;
		self.descend(self.nodes[id.index()][Side::Left], Side::Right);
		self.remaining -= 1;
		Some(id)
	}

	#[inline]
	fn entry(&self, id: NodeId) -> (&'a K, &'a V) {
		let nodes: &'a [Node<K, V>] = self.nodes;
		let node = &nodes[id.index()];
		(&node.key, &node.value)
	}
}

impl<K, V> Clone for Iter<'_, K, V> {
	fn clone(&self) -> Self {
		Iter {
			nodes: self.nodes,
			front: self.front.clone(),
			back: self.back.clone(),
			remaining: self.remaining,
		}
	}
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
	type Item = (&'a K, &'a V);

	fn next(&mut self) -> Option<Self::Item> {
		self.next_id().map(|id| self.entry(id))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.next_back_id().map(|id| self.entry(id))
	}
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over the keys of an [`OrderedMap`] in ascending order.
pub struct Keys<'a, K, V> {
	inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
	pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
		Keys {
			inner,
		}
	}
}

impl<K, V> Clone for Keys<'_, K, V> {
	fn clone(&self) -> Self {
		Keys {
			inner: self.inner.clone(),
		}
	}
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
	type Item = &'a K;

	fn next(&mut self) -> Option<&'a K> {
		self.inner.next().map(|(k, _)| k)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back().map(|(k, _)| k)
	}
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the values of an [`OrderedMap`], ordered by key.
pub struct Values<'a, K, V> {
	inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
	pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
		Values {
			inner,
		}
	}
}

impl<K, V> Clone for Values<'_, K, V> {
	fn clone(&self) -> Self {
		Values {
			inner: self.inner.clone(),
		}
	}
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
	type Item = &'a V;

	fn next(&mut self) -> Option<&'a V> {
		self.inner.next().map(|(_, v)| v)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back().map(|(_, v)| v)
	}
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// Owning iterator over the entries of an [`OrderedMap`], sorted by key.
///
/// The traversal order is computed up front; entries are then moved out of
/// the arena one slot at a time.
pub struct IntoIter<K, V> {
	slots: Vec<Option<(K, V)>>,
	order: std::vec::IntoIter<NodeId>,
}

impl<K, V> IntoIter<K, V> {
	pub(crate) fn new(map: OrderedMap<K, V>) -> Self {
		let order: Vec<NodeId> = {
			let mut iter = map.iter();
			std::iter::from_fn(|| iter.next_id()).collect()
		};
		let slots = map.nodes.into_iter().map(|node| Some((node.key, node.value))).collect();
		IntoIter {
			slots,
			order: order.into_iter(),
		}
	}
}

impl<K, V> Iterator for IntoIter<K, V> {
	type Item = (K, V);

	fn next(&mut self) -> Option<(K, V)> {
		let id = self.order.next()?;
		self.slots[id.index()].take()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.order.size_hint()
	}
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
	fn next_back(&mut self) -> Option<(K, V)> {
		let id = self.order.next_back()?;
		self.slots[id.index()].take()
	}
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

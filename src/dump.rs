//! Human-readable dump of the tree shape, for debugging.
use crate::node::{NodeId, Side};
use crate::{OrderedMap, INLINE_DEPTH};
use smallvec::SmallVec;
use std::fmt::{self, Write};

/// In-order dump of an [`OrderedMap`], created by [`OrderedMap::dump`].
///
/// One line per key: a `.` for every level of depth, the key, then
/// ` : Red` or ` : Black`. The format is meant for people; do not parse it.
pub struct Dump<'a, K, V> {
	map: &'a OrderedMap<K, V>,
}

impl<'a, K, V> Dump<'a, K, V> {
	pub(crate) fn new(map: &'a OrderedMap<K, V>) -> Self {
		Dump {
			map,
		}
	}
}

impl<K: fmt::Display, V> fmt::Display for Dump<'_, K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let map = self.map;
		let mut stack: SmallVec<[(NodeId, usize); INLINE_DEPTH]> = SmallVec::new();
		let mut current = map.root.map(|id| (id, 0));

		loop {
			while let Some((id, depth)) = current {
				stack.push((id, depth));
				current = map.node(id)[Side::Left].map(|child| (child, depth + 1));
			}

			let Some((id, depth)) = stack.pop() else {
				return Ok(());
			};
			let node = map.node(id);
			for _ in 0..depth {
				f.write_char('.')?;
			}
			writeln!(f, "{} : {}", node.key, node.color)?;

			current = node[Side::Right].map(|child| (child, depth + 1));
		}
	}
}

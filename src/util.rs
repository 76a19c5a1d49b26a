//! Test utilities for loading hand-built trees from JSON fixtures.
//!
//! Fixtures describe the exact shape and colors of a tree, so they can encode
//! broken trees that the public API would never produce. Links and
//! orientation flags are derived from the nesting and are always consistent.
use crate::node::{Color, Node, NodeId, Side};
use crate::OrderedMap;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy)]
enum FixtureColor {
	Red,
	Black,
}

impl From<FixtureColor> for Color {
	fn from(color: FixtureColor) -> Color {
		match color {
			FixtureColor::Red => Color::Red,
			FixtureColor::Black => Color::Black,
		}
	}
}

#[derive(Deserialize, Debug)]
struct TreeNode {
	key: i64,
	value: i64,
	color: FixtureColor,
	#[serde(default)]
	left: Option<Box<TreeNode>>,
	#[serde(default)]
	right: Option<Box<TreeNode>>,
}

#[derive(Deserialize, Debug)]
struct SampleTree {
	root: Option<TreeNode>,
}

/// Appends `tree_node` and its descendants to `nodes`, returning its handle.
fn translate_node(
	tree_node: TreeNode,
	parent: Option<(NodeId, Side)>,
	nodes: &mut Vec<Node<i64, i64>>,
) -> NodeId {
	let id = NodeId::new(nodes.len());
	let mut node = Node::new(tree_node.key, tree_node.value);
	node.color = tree_node.color.into();
	if let Some((parent, side)) = parent {
		node.parent = Some(parent);
		node.side = side;
	}
	nodes.push(node);

	for (side, child) in [(Side::Left, tree_node.left), (Side::Right, tree_node.right)] {
		if let Some(child) = child {
			let child_id = translate_node(*child, Some((id, side)), nodes);
			nodes[id.index()][side] = Some(child_id);
		}
	}
	id
}

pub fn sample_map<P: AsRef<std::path::Path>>(path: P) -> OrderedMap<i64, i64> {
	let file = std::fs::File::open(path).expect("failed to find file");
	let sample: SampleTree = serde_json::from_reader(file).unwrap();

	let mut nodes = Vec::new();
	let root = sample.root.map(|root| translate_node(root, None, &mut nodes));
	OrderedMap {
		nodes,
		root,
	}
}
